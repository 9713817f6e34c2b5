//! Echo request and message log payloads.
//!
//! `POST /api/echo` records a message on the server, and
//! `GET /api/messages` returns the log in insertion order.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Body of `POST /api/echo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EchoRequest {
    /// The trimmed message text.
    pub message: String,
}

impl EchoRequest {
    /// Build an echo request from raw input.
    ///
    /// Returns `None` when the input is empty after trimming.
    pub fn from_input(input: &str) -> Option<Self> {
        let message = input.trim();
        if message.is_empty() {
            None
        } else {
            Some(Self {
                message: message.to_owned(),
            })
        }
    }
}

/// A single entry of the message log.
///
/// Fields are displayed as sent. An entry that is not an object has no
/// fields (each prints `undefined`); only a `null` entry is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LoggedMessage {
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub id: Option<Value>,
    /// Server-side ISO 8601 timestamp of when the message was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub timestamp: Option<Value>,
    /// The message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub message: Option<Value>,
}

impl<'de> Deserialize<'de> for LoggedMessage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Err(D::Error::custom("message entry is null")),
            Value::Object(mut fields) => Ok(Self {
                id: fields.remove("id"),
                timestamp: fields.remove("timestamp"),
                message: fields.remove("message"),
            }),
            _ => Ok(Self::default()),
        }
    }
}

/// Body of `GET /api/messages`.
///
/// `messages` must be an array; everything else is informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MessageLog {
    /// Messages in the order the server returned them.
    pub messages: Vec<LoggedMessage>,
    /// Number of messages the server holds, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub count: Option<Value>,
    /// Identifier of the serving instance, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub server: Option<Value>,
}
