//! Core data types for daybucket.
//!
//! This module defines the primary types used throughout the library:
//! - [`DaySpan`] - A date interval a record occupies
//! - [`Window`] - The consecutive calendar days being bucketed
//! - [`DayBucket`] - The records assigned to one day
//! - [`BucketMap`] - The full day-ordered result of a bucketing run

use std::ops::Range;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde::ser::SerializeMap;

use crate::day::{add_days, format_day, has_fixed_width_key, truncate_to_day};
use crate::error::{DayBucketError, Result};

/// A date interval occupied by a record.
///
/// - no `start`: the span is ignored
/// - `start` only: a single day at `day(start)`
/// - `start` and `end`: every day from `day(start)` to `day(end)`, inclusive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DaySpan {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DaySpan {
    /// A span anchored on a single nominal date.
    pub fn single(date: Option<DateTime<Utc>>) -> Self {
        Self {
            start: date,
            end: None,
        }
    }

    /// A span with an optional closing date.
    pub fn range(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }
}

/// A window of consecutive UTC calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    /// First day of the window.
    start: NaiveDate,
    /// Number of days, possibly zero.
    number_of_days: usize,
}

impl Window {
    /// Build a window starting at the UTC day of `start`.
    ///
    /// A negative `number_of_days` has no meaning and is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use daybucket_core::models::Window;
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).single().unwrap();
    /// let window = Window::new(start, 3).unwrap();
    /// assert_eq!(window.days(), vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    ///
    /// assert!(Window::new(start, -1).is_err());
    /// ```
    pub fn new(start: DateTime<Utc>, number_of_days: i64) -> Result<Self> {
        let count = u64::try_from(number_of_days).map_err(|_| {
            DayBucketError::InvalidWindow(format!(
                "Number of days must be non-negative, got {}",
                number_of_days
            ))
        })?;

        Self::from_date(truncate_to_day(start), count)
    }

    /// Build a window from an already truncated start date.
    pub fn from_date(start: NaiveDate, number_of_days: u64) -> Result<Self> {
        if number_of_days > 0 {
            let last = add_days(start, number_of_days - 1).ok_or_else(|| {
                DayBucketError::InvalidWindow(format!(
                    "Window of {} days starting {} overflows the calendar",
                    number_of_days, start
                ))
            })?;

            // Bucket lookups compare day strings lexically.
            if !has_fixed_width_key(start) || !has_fixed_width_key(last) {
                return Err(DayBucketError::InvalidWindow(format!(
                    "Window {}..={} must lie within years 0000-9999",
                    start, last
                )));
            }
        }

        let number_of_days = usize::try_from(number_of_days).map_err(|_| {
            DayBucketError::InvalidWindow(format!("Window too large: {} days", number_of_days))
        })?;

        Ok(Self {
            start,
            number_of_days,
        })
    }

    /// The window covering `day(start)` through `day(end)`, inclusive.
    ///
    /// This is the itinerary window of a collection with a start and end date.
    pub fn spanning(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        let first = truncate_to_day(start);
        let last = truncate_to_day(end);

        if last < first {
            return Err(DayBucketError::InvalidWindow(format!(
                "End {} is before start {}",
                last, first
            )));
        }

        let number_of_days = (last - first).num_days() + 1;
        Self::from_date(first, number_of_days.unsigned_abs())
    }

    /// First day of the window.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Number of days in the window.
    pub fn number_of_days(&self) -> usize {
        self.number_of_days
    }

    /// Last day of the window, `None` for an empty window.
    pub fn last(&self) -> Option<NaiveDate> {
        let offset = (self.number_of_days as u64).checked_sub(1)?;
        add_days(self.start, offset)
    }

    /// The window's dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.number_of_days as u64).filter_map(move |offset| add_days(start, offset))
    }

    /// The window's day strings in ascending order.
    pub fn days(&self) -> Vec<String> {
        self.dates().map(format_day).collect()
    }
}

/// The records assigned to one day of the window.
#[derive(Debug, PartialEq)]
pub struct DayBucket<'a, R> {
    /// Day string (`YYYY-MM-DD`).
    pub day: String,
    /// Records in placement order.
    pub records: Vec<&'a R>,
}

/// Day-ordered mapping from day string to the records overlapping that day.
///
/// Keys are exactly the window's days, created up front in ascending order,
/// so every in-window lookup hits even when nothing was placed there.
#[derive(Debug, PartialEq)]
pub struct BucketMap<'a, R> {
    buckets: Vec<DayBucket<'a, R>>,
}

impl<'a, R> BucketMap<'a, R> {
    /// Create one empty bucket per day.
    ///
    /// `days` must be strictly ascending fixed-width day strings.
    pub(crate) fn with_days(days: Vec<String>) -> Self {
        let buckets = days
            .into_iter()
            .map(|day| DayBucket {
                day,
                records: Vec::new(),
            })
            .collect();

        Self { buckets }
    }

    fn position(&self, day: &str) -> Option<usize> {
        self.buckets
            .binary_search_by(|bucket| bucket.day.as_str().cmp(day))
            .ok()
    }

    /// Indices of the buckets whose day lies in `[first, last]`.
    pub(crate) fn overlapping(&self, first: &str, last: &str) -> Range<usize> {
        // Comparison is lexical on the day strings. That is chronological
        // only because window keys are zero-padded, fixed-width and
        // UTC-normalized (enforced by `Window::from_date`).
        let lower = self
            .buckets
            .partition_point(|bucket| bucket.day.as_str() < first);
        let upper = self
            .buckets
            .partition_point(|bucket| bucket.day.as_str() <= last);

        lower..upper.max(lower)
    }

    /// Append `record` to the bucket for `day`. Returns false if `day` is
    /// outside the window.
    pub(crate) fn place(&mut self, day: &str, record: &'a R) -> bool {
        match self.position(day) {
            Some(index) => {
                self.buckets[index].records.push(record);
                true
            }
            None => false,
        }
    }

    /// Append `record` to every bucket in `range`.
    pub(crate) fn place_range(&mut self, range: Range<usize>, record: &'a R) {
        for bucket in &mut self.buckets[range] {
            bucket.records.push(record);
        }
    }

    /// Records for `day`, or `None` if `day` is outside the window.
    pub fn get(&self, day: &str) -> Option<&[&'a R]> {
        self.position(day)
            .map(|index| self.buckets[index].records.as_slice())
    }

    /// Iterate `(day, records)` pairs in ascending day order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a R])> {
        self.buckets
            .iter()
            .map(|bucket| (bucket.day.as_str(), bucket.records.as_slice()))
    }

    /// The buckets in ascending day order.
    pub fn buckets(&self) -> &[DayBucket<'a, R>] {
        &self.buckets
    }

    /// The day strings in ascending order.
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|bucket| bucket.day.as_str())
    }

    /// Number of days (keys).
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of placements across all days.
    pub fn total_placements(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.records.len()).sum()
    }
}

impl<R: Serialize> Serialize for BucketMap<'_, R> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for bucket in &self.buckets {
            map.serialize_entry(&bucket.day, &bucket.records)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().unwrap()
    }

    #[test]
    fn window_truncates_start() {
        let start = Utc.with_ymd_and_hms(2024, 2, 28, 23, 59, 0).single().unwrap();
        let window = Window::new(start, 3).unwrap();
        assert_eq!(window.start(), NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        assert_eq!(window.days(), vec!["2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn window_zero_days_is_empty() {
        let window = Window::new(utc(2024, 1, 1), 0).unwrap();
        assert_eq!(window.number_of_days(), 0);
        assert!(window.days().is_empty());
        assert_eq!(window.last(), None);
    }

    #[test]
    fn window_negative_days_rejected() {
        let result = Window::new(utc(2024, 1, 1), -3);
        assert!(matches!(result, Err(DayBucketError::InvalidWindow(_))));
    }

    #[test]
    fn window_overflow_rejected() {
        let result = Window::new(utc(9999, 12, 30), 5);
        assert!(matches!(result, Err(DayBucketError::InvalidWindow(_))));
    }

    #[test]
    fn window_spanning_is_inclusive() {
        let window = Window::spanning(utc(2024, 1, 30), utc(2024, 2, 2)).unwrap();
        assert_eq!(window.number_of_days(), 4);
        assert_eq!(window.last(), NaiveDate::from_ymd_opt(2024, 2, 2));
    }

    #[test]
    fn window_spanning_single_day() {
        let start = Utc.with_ymd_and_hms(2024, 1, 30, 8, 0, 0).single().unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 30, 20, 0, 0).single().unwrap();
        let window = Window::spanning(start, end).unwrap();
        assert_eq!(window.days(), vec!["2024-01-30"]);
    }

    #[test]
    fn window_spanning_reversed_rejected() {
        assert!(Window::spanning(utc(2024, 2, 2), utc(2024, 1, 30)).is_err());
    }

    #[test]
    fn window_serialization() {
        let window = Window::new(utc(2024, 1, 1), 2).unwrap();
        assert_eq!(
            serde_json::to_string(&window).unwrap(),
            r#"{"start":"2024-01-01","number_of_days":2}"#
        );
    }

    #[test]
    fn bucket_map_lookup_and_placement() {
        let records = ["a", "b"];
        let days = Window::new(utc(2024, 1, 1), 3).unwrap().days();
        let mut map: BucketMap<'_, &str> = BucketMap::with_days(days);

        assert!(map.place("2024-01-02", &records[0]));
        assert!(!map.place("2024-01-09", &records[1]));

        assert_eq!(map.get("2024-01-02"), Some(&[&"a"][..]));
        assert_eq!(map.get("2024-01-01").map(<[_]>::len), Some(0));
        assert_eq!(map.get("2023-12-31"), None);
        assert_eq!(map.total_placements(), 1);
    }

    #[test]
    fn overlapping_clamps_to_window() {
        let days = Window::new(utc(2024, 1, 1), 5).unwrap().days();
        let map: BucketMap<'_, ()> = BucketMap::with_days(days);

        assert_eq!(map.overlapping("2023-12-01", "2024-01-02"), 0..2);
        assert_eq!(map.overlapping("2024-01-04", "2024-02-01"), 3..5);
        assert_eq!(map.overlapping("2024-02-01", "2024-02-03"), 5..5);
        assert_eq!(map.overlapping("2023-01-01", "2023-01-03"), 0..0);
        // reversed range selects nothing
        assert!(map.overlapping("2024-01-03", "2024-01-02").is_empty());
    }

    #[test]
    fn bucket_map_serializes_in_day_order() {
        let records = [1u32, 2];
        let days = Window::new(utc(2024, 1, 1), 2).unwrap().days();
        let mut map = BucketMap::with_days(days);
        map.place("2024-01-02", &records[1]);
        map.place("2024-01-02", &records[0]);

        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"2024-01-01":[],"2024-01-02":[2,1]}"#
        );
    }
}
