//! Loose numeric coercion for loosely-typed input.
//!
//! Anchor records and evaluation inputs may come from hosts that do not
//! distinguish `"0.5"` from `0.5`. These helpers turn such values into `f64`
//! with the usual scripting-host rules, and refuse anything that has no
//! sensible numeric reading.

use serde_json::Value;

/// Convert a JSON value to a number.
///
/// - numbers convert directly
/// - `true` / `false` become `1` / `0`
/// - `null` becomes `0`
/// - strings are trimmed; an empty string is `0`, otherwise it must parse as a
///   finite `f64`
/// - arrays and objects have no numeric reading
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::String(s) => str_to_number(s),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Convert a string to a number using the same rules as [`to_number`].
pub fn str_to_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
