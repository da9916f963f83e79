//! # Core Application Logic
//!
//! The quiz's business logic. It knows nothing about terminals or stdin.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigator (menu FSM) │
//!                    │  • QuizSession          │
//!                    │  • convert (parsing)    │
//!                    │                         │
//!                    │  No stdin. No stdout.   │
//!                    └───────────┬─────────────┘
//!                                │ Screen trait
//!                                ▼
//!                         ┌────────────┐
//!                         │  Console   │
//!                         │  Adapter   │
//!                         │  (tokio)   │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigator`]: `State`, `Event`, the transition table and `Navigator`
//! - [`quiz`]: the questions, `QuizSession` and `Outcome`
//! - [`convert`]: strict integer and decimal parsing
//! - [`content`]: menu and result text
//! - [`config`]: config file, env and CLI resolution

pub mod config;
pub mod content;
pub mod convert;
pub mod navigator;
pub mod quiz;
