//! UTC calendar-day utilities.
//!
//! This module provides the day-string rendering that bucket keys are built
//! from, plus the calendar arithmetic and formatting helpers shared by the
//! window, bucketing and export code.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

/// Format of a day string (`YYYY-MM-DD`).
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Earliest year whose day strings are fixed-width.
pub const MIN_KEY_YEAR: i32 = 0;

/// Latest year whose day strings are fixed-width.
pub const MAX_KEY_YEAR: i32 = 9999;

/// Truncate a UTC instant to its UTC calendar date.
///
/// The caller's local timezone never takes part: `2024-01-01T23:30:00-05:00`
/// is `2024-01-02` here.
pub fn truncate_to_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Render a calendar date as a day string.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use daybucket_core::day::format_day;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// assert_eq!(format_day(date), "2024-01-02");
/// ```
pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Render the UTC calendar date of an instant as a day string.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use daybucket_core::day::day_key;
///
/// let instant = Utc.with_ymd_and_hms(2024, 1, 2, 23, 59, 59).single().unwrap();
/// assert_eq!(day_key(instant), "2024-01-02");
/// ```
pub fn day_key(instant: DateTime<Utc>) -> String {
    format_day(truncate_to_day(instant))
}

/// Whether the day string of `date` is zero-padded and four-digit-year wide,
/// which is what makes lexical comparison of day strings chronological.
pub fn has_fixed_width_key(date: NaiveDate) -> bool {
    (MIN_KEY_YEAR..=MAX_KEY_YEAR).contains(&date.year())
}

/// Add whole calendar days to a date, `None` on calendar overflow.
pub fn add_days(date: NaiveDate, offset: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(offset))
}

/// Format a UTC datetime as RFC3339 with Z suffix.
pub fn format_rfc3339_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Format a date as an iCalendar `DATE` value (`YYYYMMDD`).
pub fn format_ics_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Format a UTC datetime as an iCalendar `DATE-TIME` value (`YYYYMMDDTHHMMSSZ`).
pub fn format_ics_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}
