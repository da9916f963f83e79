//! # Input Conversion
//!
//! Strict text-to-number parsing. Unlike `str::parse`, these reject anything
//! a user could mistype without noticing: empty input, leading whitespace,
//! trailing junk. Overflow is reported separately from bad formatting so
//! callers can tell "not a number" from "too big".

use std::fmt;
use std::num::IntErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// Empty, leading whitespace, no digits, or trailing characters.
    InvalidFormat,
    /// Well-formed, but not representable in the target type.
    OutOfRange,
    /// Radix outside 2..=36.
    UnsupportedBase(u32),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidFormat => write!(f, "invalid number format"),
            ConvertError::OutOfRange => write!(f, "number out of range"),
            ConvertError::UnsupportedBase(base) => write!(f, "unsupported base {base}"),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Strips exactly one trailing line terminator (`\n` or `\r\n`).
pub fn trim_line_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}

fn starts_malformed(text: &str) -> bool {
    text.chars().next().is_none_or(char::is_whitespace)
}

/// Parses `text` as an `i32` in the given base.
///
/// Accepts one optional leading sign and, in base 16, an optional `0x`/`0X`
/// prefix after it. Everything else must be digits of `base`.
pub fn parse_integer(text: &str, base: u32) -> Result<i32, ConvertError> {
    if !(2..=36).contains(&base) {
        return Err(ConvertError::UnsupportedBase(base));
    }
    if starts_malformed(text) {
        return Err(ConvertError::InvalidFormat);
    }

    let (sign, digits) = match text.as_bytes()[0] {
        b'+' => ("", &text[1..]),
        b'-' => ("-", &text[1..]),
        _ => ("", text),
    };
    let digits = if base == 16 {
        digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits)
    } else {
        digits
    };

    // A second sign would be accepted by from_str_radix on the rebuilt string
    if digits.starts_with(['+', '-']) {
        return Err(ConvertError::InvalidFormat);
    }

    i32::from_str_radix(&format!("{sign}{digits}"), base).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConvertError::OutOfRange,
        _ => ConvertError::InvalidFormat,
    })
}

/// Parses `text` as an `f64`.
///
/// A finite literal that overflows to infinity, or a non-zero literal that
/// underflows to zero, is `OutOfRange`. `inf` and `nan` spelled out are
/// accepted as-is. Hex float literals such as `0x1p3` are not, and give
/// `InvalidFormat`.
pub fn parse_decimal(text: &str) -> Result<f64, ConvertError> {
    if starts_malformed(text) {
        return Err(ConvertError::InvalidFormat);
    }

    let value: f64 = text.parse().map_err(|_| ConvertError::InvalidFormat)?;

    let mantissa = text.split(['e', 'E']).next().unwrap_or(text);
    let spelled_out = mantissa.chars().any(|c| c.is_ascii_alphabetic());
    if value.is_infinite() && !spelled_out {
        return Err(ConvertError::OutOfRange);
    }
    if value == 0.0 && mantissa.chars().any(|c| matches!(c, '1'..='9')) {
        return Err(ConvertError::OutOfRange);
    }
    Ok(value)
}
