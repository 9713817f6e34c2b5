//! Browser value semantics for loosely typed response fields.
//!
//! The API is free to send any JSON for most display fields, and a field
//! may be absent altogether. These helpers reproduce what a browser page
//! shows for such values: `String(value)` for display, browser
//! truthiness for flags, and `undefined` for a missing field.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text a browser prints for a missing field.
pub const UNDEFINED: &str = "undefined";

/// Largest magnitude printed without exponent notation.
const PLAIN_NOTATION_MAX: f64 = 1e21;

/// Smallest magnitude printed without exponent notation.
const PLAIN_NOTATION_MIN: f64 = 1e-6;

/// Print a JSON value the way a browser's `String(value)` would.
///
/// Integral floats lose their fraction (`5.0` prints `5`), very large and
/// very small magnitudes switch to exponent form (`1e+21`, `1e-7`),
/// strings print without quotes, arrays join with commas.
pub fn display(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n
            .as_i64()
            .map(|i| i.to_string())
            .or_else(|| n.as_u64().map(|u| u.to_string()))
            .unwrap_or_else(|| number(n.as_f64().unwrap_or(f64::NAN))),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                if item.is_null() {
                    String::new()
                } else {
                    display(item)
                }
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

/// Print a possibly missing field; absent prints `undefined`.
pub fn display_field(field: Option<&Value>) -> String {
    field.map_or_else(|| UNDEFINED.to_owned(), display)
}

/// Browser truthiness of a JSON value (`if (value)`).
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Print a float as `Number.prototype.toString` does.
fn number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        let text = if n.is_sign_positive() { "Infinity" } else { "-Infinity" };
        return text.to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }

    let magnitude = n.abs();
    if !(PLAIN_NOTATION_MIN..PLAIN_NOTATION_MAX).contains(&magnitude) {
        // `{:e}` already picks the shortest mantissa; only the sign of a
        // positive exponent differs.
        let text = format!("{n:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        format!("{n}")
    }
}

/// Deserialize a field that was present in the body, even as `null`.
///
/// Paired with `#[serde(default)]`, an absent field stays `None` while an
/// explicit `null` becomes `Some(Value::Null)`, which print differently.
pub(crate) fn present<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}
