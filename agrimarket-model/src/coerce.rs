//! Field coercion for loosely-typed input.
//!
//! Form values arrive as strings (`"30"`, `"500.50"`, `""`) and legacy
//! documents carry the same shapes, so every numeric field goes through
//! prefix parsing: leading whitespace is skipped, an optional sign and the
//! longest numeric prefix are taken, and anything else yields `None`.
//! Callers pick the default (usually 0).

use agrimarket_types::Timestamp;
use serde_json::{Map, Value};

/// Parses the integer prefix of `s` (`"30 years"` -> 30, `"4.9"` -> 4).
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse::<i64>().ok()
}

/// Parses the decimal prefix of `s` (`"12.5kg"` -> 12.5, `".5"` -> 0.5,
/// `"2e3"` -> 2000).
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }
    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerces a JSON value to an integer. Numbers are truncated toward zero.
pub fn int_value(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

/// Coerces a JSON value to a finite float.
pub fn number_value(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
}

/// Coerces a JSON value to a string. Missing and `null` become `""`.
pub fn string_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Coerces a JSON value to a boolean, accepting `"true"`/`"false"` strings.
pub fn bool_value(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Coerces a JSON value to a list of tags.
///
/// Arrays keep their non-empty string (or numeric) members in order; a
/// plain string is split on commas. Returns `None` when the field is
/// missing or `null` so the caller can apply its own default. A present but
/// empty array stays empty.
pub fn string_list_value(value: Option<&Value>) -> Option<Vec<String>> {
    match value? {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.trim().to_string()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        Value::String(s) => Some(
            s.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        ),
        Value::Null => None,
        _ => Some(Vec::new()),
    }
}

/// Non-negative integer field, defaulting to 0.
pub(crate) fn non_negative_int(fields: &Map<String, Value>, key: &str) -> u32 {
    int_value(fields.get(key))
        .map(|v| v.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

/// Non-negative number field, defaulting to 0.
pub(crate) fn non_negative_number(fields: &Map<String, Value>, key: &str) -> f64 {
    number_value(fields.get(key)).map(|v| v.max(0.0)).unwrap_or(0.0)
}

/// Optional string field; empty strings collapse to `None`.
pub(crate) fn optional_string(fields: &Map<String, Value>, key: &str) -> Option<String> {
    let s = string_value(fields.get(key));
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Parses a `createdAt`-style field: integer milliseconds, or an RFC 3339
/// string written by another client of the same collection.
pub(crate) fn timestamp_value(value: Option<&Value>) -> Option<Timestamp> {
    match value? {
        Value::String(s) => Timestamp::parse_stored(s),
        other => int_value(Some(other)).map(Timestamp::from_millis),
    }
}
