//! Numeric helpers shared by the normalizer and the aggregators.
//!
//! Holding records arrive from external stores and edit forms, so numeric
//! fields may be numbers, numeric strings, booleans, `null` or garbage.
//! [`coerce_number`] turns any of these into a finite-or-infinite `f64` that
//! is never `NaN`; [`clamp`] then bounds it.

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Coerces an untrusted JSON value to a number.
///
/// - numbers are taken as-is
/// - strings are trimmed and parsed; an empty string is `0`, and unsigned
///   `0x`/`0o`/`0b` literals are read in their radix
/// - `true`/`false` are `1`/`0`
/// - anything else (including unparseable strings and `NaN`) is `0`
///
/// Infinite values survive so that clamping pins them to the range bound.
#[must_use]
pub fn coerce_number(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => parse_numeric_str(s),
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        _ => 0.0,
    };
    if n.is_nan() {
        0.0
    } else {
        n
    }
}

fn parse_numeric_str(s: &str) -> f64 {
    let trimmed = s.trim();
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        t if radix_prefix(t).is_some() => parse_radix_literal(t),
        // Rust accepts "inf"/"nan" spellings that form inputs never mean as numbers.
        t if t.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => 0.0,
        t => t.parse::<f64>().unwrap_or(0.0),
    }
}

fn radix_prefix(t: &str) -> Option<u32> {
    match t.get(..2)? {
        "0x" | "0X" => Some(16),
        "0o" | "0O" => Some(8),
        "0b" | "0B" => Some(2),
        _ => None,
    }
}

/// Reads `0x1F`-style literals; a bad digit makes the whole string `0`.
fn parse_radix_literal(t: &str) -> f64 {
    let (Some(radix), Some(digits)) = (radix_prefix(t), t.get(2..)) else {
        return 0.0;
    };
    if digits.is_empty() {
        return 0.0;
    }
    digits
        .chars()
        .try_fold(0.0, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(0.0)
}

/// Clamps `value` to `[min, max]`, mapping `NaN` to `0` first.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    let v = if value.is_nan() { 0.0 } else { value };
    v.max(min).min(max)
}

/// Rounds to `places` decimal places, half away from zero.
///
/// Rounding operates on the exact binary value, so `2.675` (stored as
/// `2.67499999...`) rounds down to `2.67`.
#[must_use]
pub fn round_dp(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // Decimal text parses to the nearest f64, unlike `to_f64`.
    let rounded = Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_string().parse::<f64>().ok())
        .unwrap_or(value);
    // Avoid surfacing negative zero in displays.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Formats `value` with a fixed number of decimals.
///
/// Rounds with [`round_dp`] first, so exact ties go away from zero.
#[must_use]
pub fn format_fixed(value: f64, places: u32) -> String {
    let precision = usize::try_from(places).unwrap_or(usize::MAX);
    format!("{:.*}", precision, round_dp(value, places))
}

/// Like [`format_fixed`] but with an explicit `+` on non-negative values.
#[must_use]
pub fn format_signed(value: f64, places: u32) -> String {
    let rounded = round_dp(value, places);
    let sign = if rounded >= 0.0 { "+" } else { "" };
    format!("{sign}{}", format_fixed(rounded, places))
}
