//! Text normalization and numeric parsing for scraped strings.

use serde::Serialize;

use crate::patterns::{NUMERIC_TEXT, WHITESPACE_NORMALIZE};

/// Collapse every run of whitespace into one space and trim both ends.
///
/// # Example
///
/// ```rust
/// use pdp_extract::text::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  4.5 out\n\tof 5 "), "4.5 out of 5");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Numeric type requested from [`extract_numeric`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Int,
    Float,
}

/// A number pulled out of page text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Value as an integer, truncating floats toward zero.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Int(v) => v,
            Self::Float(v) => v as i64,
        }
    }

    /// Value as a float.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

/// Extract the first number from `text`.
///
/// Thousands separators are dropped. The number is parsed as a float when
/// `kind` is [`NumericKind::Float`] or the digits contain a `.`, otherwise as
/// an integer. With `allow_k`, a `K` directly after the digits multiplies the
/// value by 1000. An [`NumericKind::Int`] request always yields
/// [`Number::Int`] (floats are truncated), a [`NumericKind::Float`] request
/// always yields [`Number::Float`].
///
/// Returns `None` for missing or empty text, text without digits, and digit
/// runs that do not parse (`"1.2.3"`).
///
/// # Example
///
/// ```rust
/// use pdp_extract::text::{extract_numeric, Number, NumericKind};
///
/// assert_eq!(extract_numeric(Some("1,234"), NumericKind::Int, false), Some(Number::Int(1234)));
/// assert_eq!(extract_numeric(Some("2K"), NumericKind::Int, true), Some(Number::Int(2000)));
/// assert_eq!(extract_numeric(None, NumericKind::Int, false), None);
/// ```
#[must_use]
pub fn extract_numeric(text: Option<&str>, kind: NumericKind, allow_k: bool) -> Option<Number> {
    let text = text.filter(|t| !t.is_empty())?;
    let caps = NUMERIC_TEXT.captures(text)?;

    let digits = caps.name("number")?.as_str().replace(',', "");
    let scale = allow_k && caps.name("thousands").is_some();

    let value = if kind == NumericKind::Float || digits.contains('.') {
        let v: f64 = digits.parse().ok()?;
        Number::Float(if scale { v * 1000.0 } else { v })
    } else {
        let v: i64 = digits.parse().ok()?;
        Number::Int(if scale { v.checked_mul(1000)? } else { v })
    };

    Some(match kind {
        NumericKind::Int => Number::Int(value.as_i64()),
        NumericKind::Float => Number::Float(value.as_f64()),
    })
}

/// [`extract_numeric`] as an integer.
#[must_use]
pub fn extract_int(text: Option<&str>, allow_k: bool) -> Option<i64> {
    extract_numeric(text, NumericKind::Int, allow_k).map(Number::as_i64)
}

/// [`extract_numeric`] as a float.
#[must_use]
pub fn extract_float(text: Option<&str>, allow_k: bool) -> Option<f64> {
    extract_numeric(text, NumericKind::Float, allow_k).map(Number::as_f64)
}
