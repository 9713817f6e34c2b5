//! Configuration for the console.
//!
//! All configuration is loaded from environment variables. Every variable
//! is optional; defaults target a locally running API server.

use std::time::Duration;

use crate::error::ConsoleError;

/// Default API origin.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default period of the automatic health check, in seconds.
pub const DEFAULT_HEALTH_INTERVAL_SECS: u64 = 30;

/// Default `chrono` pattern for localised timestamps (`en-US` style,
/// e.g. `3/1/2025, 9:15:00 AM`).
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Complete console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Origin every `/api/*` request targets (e.g. `http://localhost:5000`).
    pub base_url: String,
    /// Period of the automatic health check.
    pub health_interval: Duration,
    /// Per-request timeout. `None` leaves the HTTP client default in place.
    pub request_timeout: Option<Duration>,
    /// `chrono` strftime pattern used for every displayed timestamp.
    pub timestamp_format: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            health_interval: Duration::from_secs(DEFAULT_HEALTH_INTERVAL_SECS),
            request_timeout: None,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_owned(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `PULSE_BASE_URL` -- API origin (default `http://localhost:5000`)
    /// - `PULSE_HEALTH_INTERVAL_SECS` -- health check period (default 30, must be > 0)
    /// - `PULSE_REQUEST_TIMEOUT_MS` -- per-request timeout (default: none)
    /// - `PULSE_TIMESTAMP_FORMAT` -- strftime pattern for timestamps
    pub fn from_env() -> Result<Self, ConsoleError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// [`ConsoleConfig::from_env`] is this with `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConsoleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("PULSE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        validate_base_url(&base_url)?;

        let health_interval_secs: u64 = lookup("PULSE_HEALTH_INTERVAL_SECS")
            .unwrap_or_else(|| DEFAULT_HEALTH_INTERVAL_SECS.to_string())
            .parse()
            .map_err(|e| ConsoleError::Config(format!("invalid PULSE_HEALTH_INTERVAL_SECS: {e}")))?;
        if health_interval_secs == 0 {
            return Err(ConsoleError::Config(
                "PULSE_HEALTH_INTERVAL_SECS must be at least 1".to_owned(),
            ));
        }

        let request_timeout = lookup("PULSE_REQUEST_TIMEOUT_MS")
            .map(|raw| {
                raw.parse::<u64>().map(Duration::from_millis).map_err(|e| {
                    ConsoleError::Config(format!("invalid PULSE_REQUEST_TIMEOUT_MS: {e}"))
                })
            })
            .transpose()?;

        let timestamp_format = lookup("PULSE_TIMESTAMP_FORMAT")
            .unwrap_or_else(|| DEFAULT_TIMESTAMP_FORMAT.to_owned());

        Ok(Self {
            base_url,
            health_interval: Duration::from_secs(health_interval_secs),
            request_timeout,
            timestamp_format,
        })
    }
}

/// Reject anything that is not an absolute `http`/`https` URL.
fn validate_base_url(raw: &str) -> Result<(), ConsoleError> {
    let url = reqwest::Url::parse(raw)
        .map_err(|e| ConsoleError::Config(format!("invalid PULSE_BASE_URL {raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConsoleError::Config(format!(
            "PULSE_BASE_URL must use http or https, got {other}"
        ))),
    }
}
