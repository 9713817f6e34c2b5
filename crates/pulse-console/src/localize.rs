//! Timestamp localisation.
//!
//! Server timestamps arrive as ISO 8601 strings, with or without an
//! offset. They are interpreted the way a browser `Date` would:
//!
//! - with an offset (`2025-03-01T09:15:00Z`): converted to the local zone
//! - date and time without an offset: already local time
//! - date only (`2025-03-01`): midnight UTC, converted to the local zone
//!
//! Non-string fields follow `new Date(value)`: a number is milliseconds
//! since the epoch, `null` is the epoch itself, and an absent field is
//! invalid. Anything else renders as `Invalid Date`.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

use crate::error::ConsoleError;

/// Text shown for a timestamp that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Largest distance from the epoch a browser `Date` accepts, in
/// milliseconds.
const MAX_TIME_MILLIS: f64 = 8.64e15;

/// Accepted layouts for timestamps without an offset.
const NAIVE_LAYOUTS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Formats server timestamps for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localizer {
    pattern: String,
}

impl Localizer {
    /// Create a localizer for a `chrono` strftime pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Config`] if the pattern contains an invalid
    /// specifier.
    pub fn new(pattern: &str) -> Result<Self, ConsoleError> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ConsoleError::Config(format!(
                "invalid timestamp format: {pattern}"
            )));
        }
        Ok(Self {
            pattern: pattern.to_owned(),
        })
    }

    /// The configured strftime pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render a server timestamp in local time.
    pub fn localize(&self, raw: &str) -> String {
        parse_local(raw.trim())
            .and_then(|local| self.format(&local))
            .unwrap_or_else(|| INVALID_DATE.to_owned())
    }

    /// Render a loosely typed timestamp field in local time.
    pub fn localize_value(&self, raw: Option<&Value>) -> String {
        let instant = match raw {
            None => None,
            Some(Value::String(text)) => return self.localize(text),
            Some(Value::Null) => epoch_millis(0),
            Some(Value::Bool(flag)) => epoch_millis(i64::from(*flag)),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(whole_millis))
                .and_then(epoch_millis),
            Some(other) => return self.localize(&pulse_types::js_display(other)),
        };
        instant
            .and_then(|local| self.format(&local))
            .unwrap_or_else(|| INVALID_DATE.to_owned())
    }

    fn format(&self, local: &DateTime<Local>) -> Option<String> {
        let mut out = String::new();
        write!(out, "{}", local.format(&self.pattern)).ok()?;
        Some(out)
    }
}

/// Milliseconds since the epoch as a local instant, within the browser
/// `Date` range.
fn epoch_millis(millis: i64) -> Option<DateTime<Local>> {
    if millis.unsigned_abs() > 8_640_000_000_000_000 {
        return None;
    }
    DateTime::from_timestamp_millis(millis).map(|utc| utc.with_timezone(&Local))
}

/// Truncate a float millisecond count the way `Date` does.
fn whole_millis(millis: f64) -> Option<i64> {
    if !millis.is_finite() || millis.abs() > MAX_TIME_MILLIS {
        return None;
    }
    // Bounded by MAX_TIME_MILLIS, so the cast is exact.
    #[allow(clippy::cast_possible_truncation)]
    let whole = millis.trunc() as i64;
    Some(whole)
}

/// Interpret a timestamp as an instant in the local zone.
fn parse_local(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local));
    }

    if let Some(naive) = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
    {
        // A wall-clock time skipped by a DST jump has no local instant.
        return Local.from_local_datetime(&naive).earliest();
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight).with_timezone(&Local))
}
