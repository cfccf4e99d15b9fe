//! Input parsing for record dates.
//!
//! Records arrive from the REST layer with ISO-8601 date strings in a few
//! shapes:
//! - RFC3339 with an offset (e.g., `2024-01-02T10:00:00+02:00`)
//! - a naive datetime without an offset, read as UTC (e.g., `2024-01-02T10:00:00`)
//! - a bare day (e.g., `2024-01-02`), read as UTC midnight
//!
//! Window arguments go through the strict [`parse_date`]. Record fields go
//! through the lenient variants, where anything unusable becomes "absent".

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::error::{DayBucketError, Result};

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a date string into a UTC instant.
///
/// # Examples
///
/// ```
/// use daybucket_core::parse::parse_date;
///
/// let dt = parse_date("2024-01-02").unwrap();
/// assert_eq!(dt.to_rfc3339(), "2024-01-02T00:00:00+00:00");
///
/// let dt = parse_date("2024-01-02T01:30:00+02:00").unwrap();
/// assert_eq!(dt.to_rfc3339(), "2024-01-01T23:30:00+00:00");
/// ```
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(DayBucketError::ParseError("Empty date string".to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in &NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| {
            DayBucketError::ParseError(format!(
                "Invalid date: '{}'. Expected YYYY-MM-DD or an ISO-8601 datetime. Error: {}",
                trimmed, e
            ))
        })
}

/// Parse a date string, treating any failure as an absent date.
pub fn parse_date_lenient(input: &str) -> Option<DateTime<Utc>> {
    if input.trim().is_empty() {
        return None;
    }

    match parse_date(input) {
        Ok(dt) => Some(dt),
        Err(err) => {
            debug!(%err, "ignoring unparsable record date");
            None
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Other(IgnoredAny),
}

/// Deserialize an optional record date leniently.
///
/// `null`, empty strings, unparsable strings and non-string values all
/// become `None`. Pair with `#[serde(default)]` so a missing field is `None`
/// as well.
pub fn deserialize_lenient_date<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawDate>::deserialize(deserializer)?;

    Ok(match raw {
        Some(RawDate::Text(text)) => parse_date_lenient(&text),
        Some(RawDate::Other(_)) => {
            debug!("ignoring non-string record date");
            None
        }
        None => None,
    })
}
