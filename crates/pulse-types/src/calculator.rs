//! Calculator request and response payloads for `POST /api/calculate`.
//!
//! Operands are encoded the way a browser's `JSON.stringify` would:
//! integral values without a fractional part, non-finite values as
//! `null`. The response echoes operands and the result as arbitrary JSON
//! because the server is free to answer with strings (e.g. `"undefined"`
//! for a division by zero).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use ts_rs::TS;

use crate::js;

/// Largest integer a JSON number can carry without losing precision in a
/// browser (`Number.MAX_SAFE_INTEGER`).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// One of the four arithmetic operations the server understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`
    Divide,
}

impl Operation {
    /// All operations in selector order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The selector value used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// The typographic operator shown in a rendered equation.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{00d7}",
            Self::Divide => "\u{00f7}",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a selector value names no known operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation(s.to_owned()))
    }
}

/// Map an operation name to its display symbol.
///
/// Unknown names are returned unchanged so the equation still shows
/// whatever the server echoed.
pub fn operation_symbol(op: &str) -> &str {
    let symbol: Option<&str> = op.parse::<Operation>().ok().map(Operation::symbol);
    symbol.unwrap_or(op)
}

/// Body of `POST /api/calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CalculationRequest {
    /// Left operand. `NaN` is sent as `null`.
    #[serde(serialize_with = "serialize_js_number", deserialize_with = "deserialize_js_number")]
    #[ts(type = "number | null")]
    pub a: f64,
    /// Right operand. `NaN` is sent as `null`.
    #[serde(serialize_with = "serialize_js_number", deserialize_with = "deserialize_js_number")]
    #[ts(type = "number | null")]
    pub b: f64,
    /// Raw selector value. Not restricted to [`Operation`] so an unknown
    /// selection still reaches the server.
    pub operation: String,
}

impl CalculationRequest {
    /// Build a request from already-parsed operands and a selector value.
    pub fn new(a: f64, b: f64, operation: impl Into<String>) -> Self {
        Self {
            a,
            b,
            operation: operation.into(),
        }
    }
}

/// A successful calculation as reported by the server.
///
/// Every field is displayed as sent; absent fields print `undefined`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CalculationResult {
    /// The computed value, or a placeholder string the server chose.
    #[serde(
        default,
        deserialize_with = "crate::js::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub result: Option<Value>,
    /// Left operand as echoed by the server.
    #[serde(
        default,
        deserialize_with = "crate::js::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub a: Option<Value>,
    /// Right operand as echoed by the server.
    #[serde(
        default,
        deserialize_with = "crate::js::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub b: Option<Value>,
    /// Operation name as echoed by the server.
    #[serde(
        default,
        deserialize_with = "crate::js::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub operation: Option<Value>,
    /// Server-side ISO 8601 timestamp of the calculation.
    #[serde(
        default,
        deserialize_with = "crate::js::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub calculated_at: Option<Value>,
    /// Identifier of the instance that did the work, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub server_instance: Option<Value>,
}

impl CalculationResult {
    /// Display symbol for the echoed operation.
    ///
    /// Known names map through [`operation_symbol`]; anything else prints
    /// as sent.
    pub fn symbol(&self) -> String {
        match &self.operation {
            Some(Value::String(op)) => operation_symbol(op).to_owned(),
            other => js::display_field(other.as_ref()),
        }
    }
}

/// Decoded response of `POST /api/calculate`.
///
/// A body whose `error` field is truthy is a failure regardless of any
/// other fields present. Anything else, `{"error": ""}` included, is a
/// result, with missing fields left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CalculationOutcome {
    /// The server rejected the calculation.
    Failed {
        /// Server-supplied explanation, shown verbatim.
        error: String,
    },
    /// The server computed a result.
    Computed(CalculationResult),
}

impl CalculationOutcome {
    /// The server error message, if this outcome is a failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            Self::Computed(_) => None,
        }
    }
}

/// Wire shape of a calculate response before the error check.
#[derive(Deserialize)]
struct RawOutcome {
    #[serde(default)]
    error: Option<Value>,
    #[serde(flatten)]
    result: CalculationResult,
}

impl<'de> Deserialize<'de> for CalculationOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawOutcome::deserialize(deserializer)?;
        Ok(match raw.error {
            Some(error) if js::is_truthy(&error) => Self::Failed {
                error: js::display(&error),
            },
            _ => Self::Computed(raw.result),
        })
    }
}

/// Encode an operand the way `JSON.stringify` does.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_js_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return serializer.serialize_none();
    }
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        // In range and integral, so the cast is exact.
        #[allow(clippy::cast_possible_truncation)]
        let integral = *value as i64;
        return serializer.serialize_i64(integral);
    }
    serializer.serialize_f64(*value)
}

/// Decode an operand, mapping `null` back to `NaN`.
fn deserialize_js_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
