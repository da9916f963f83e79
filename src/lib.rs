//! Jedi Quiz library exports for testing

pub mod console;
pub mod core;
pub mod timer;

#[cfg(test)]
pub mod test_support;
