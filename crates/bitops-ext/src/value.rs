//! Dynamically-typed block values and numeric coercion.
//!
//! Block arguments arrive from the host as loosely-typed scalars: whatever
//! the user typed into an input slot, or whatever a plugged-in reporter
//! produced. [`Value`] models that as a tagged union, and the coercion
//! here reproduces the host runtime's casting rules so that results match
//! the reference behavior exactly: `Number()` string conversion with NaN
//! collapsed to zero, and ToInt32 truncation for the bitwise operators.

use std::fmt;

use serde::Serialize;

/// A dynamically-typed block argument or result value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Value {
    /// Coerces this value to a number using the host's casting rules.
    ///
    /// Non-numeric text (and a NaN number) degrades to zero rather than
    /// failing; this is the documented fallback shared by every block
    /// argument, not an error condition.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        let n = match self {
            Self::Number(n) => *n,
            Self::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Text(s) => parse_number_literal(s),
        };
        if n.is_nan() { 0.0 } else { n }
    }

    /// Coerces this value to a 32-bit signed integer (ToInt32 truncation).
    #[must_use]
    pub fn to_i32(&self) -> i32 {
        to_int32(self.to_number())
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.is_infinite() => {
                write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" })
            }
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Truncates a double to a 32-bit signed integer with ToInt32 semantics:
/// non-finite values become 0, the integer part is reduced modulo 2^32 and
/// wrapped into two's-complement range.
#[must_use]
pub fn to_int32(n: f64) -> i32 {
    const TWO_POW_32: f64 = 4_294_967_296.0;
    if !n.is_finite() {
        return 0;
    }
    let truncated = n.trunc();
    if truncated == 0.0 {
        return 0;
    }
    // `%` is exact on doubles, so this matches the abstract operation even
    // for magnitudes far beyond 2^53.
    let mut modulus = truncated % TWO_POW_32;
    if modulus < 0.0 {
        modulus += TWO_POW_32;
    }
    (modulus as u32) as i32
}

/// Parses a string the way the host's `Number()` conversion does.
/// Returns NaN for anything unparseable; the caller collapses NaN to zero.
fn parse_number_literal(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return 0.0;
    }
    if let Some(digits) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        return parse_radix_literal(digits, 16);
    }
    if let Some(digits) = t.strip_prefix("0o").or_else(|| t.strip_prefix("0O")) {
        return parse_radix_literal(digits, 8);
    }
    if let Some(digits) = t.strip_prefix("0b").or_else(|| t.strip_prefix("0B")) {
        return parse_radix_literal(digits, 2);
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust's float parser accepts spellings the host does not ("inf",
    // "nan", "infinity"); anything alphabetic other than an exponent
    // marker is not a numeric literal here.
    if t.chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned integer literal in the given radix, accumulated as a double so
/// overlong literals lose precision instead of failing.
fn parse_radix_literal(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return f64::NAN,
        }
    }
    acc
}
