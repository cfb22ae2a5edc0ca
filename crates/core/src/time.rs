//! ISO-8601 timestamp parsing for request payloads.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Parse an ISO-8601 timestamp string.
///
/// Accepts both offset-carrying RFC 3339 forms (`2023-02-27T00:00:00Z`,
/// `2023-02-27T00:00:00+10:00`) and naive forms without an offset
/// (`2023-02-27T00:00:00`), which are interpreted as UTC.
pub fn parse_iso8601(value: &str) -> Result<Timestamp, CoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    value
        .parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(|_| CoreError::Validation(format!("Invalid ISO-8601 timestamp: '{value}'")))
}
