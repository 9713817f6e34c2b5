//! Health check payload returned by `GET /api/health`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Service health as reported by the API server.
///
/// Only `status` is required, and it must be a string. The other fields
/// are displayed as sent: any JSON value, with absent fields printing
/// `undefined`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HealthStatus {
    /// Free-form status word (e.g. `healthy`). Rendered uppercased.
    pub status: String,
    /// Human-readable service name.
    #[serde(
        default,
        deserialize_with = "crate::js::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub service: Option<Value>,
    /// Server-side ISO 8601 timestamp of the check.
    #[serde(
        default,
        deserialize_with = "crate::js::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub timestamp: Option<Value>,
    /// Deployment environment name.
    #[serde(
        default,
        deserialize_with = "crate::js::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub environment: Option<Value>,
    /// Hosting region.
    #[serde(
        default,
        deserialize_with = "crate::js::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub region: Option<Value>,
}

impl HealthStatus {
    /// The status word as displayed: uppercased.
    pub fn display_status(&self) -> String {
        self.status.to_uppercase()
    }
}
