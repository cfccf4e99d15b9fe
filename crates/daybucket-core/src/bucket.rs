//! Calendar-day bucketing.
//!
//! One generic algorithm serves every record kind. Each kind only has to say
//! which date spans it occupies (see [`DatedRecord`]); placement into the
//! window's days is shared.
//!
//! Missing dates never fail: a span without a start is skipped and a span
//! outside the window lands nowhere.

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::day::day_key;
use crate::error::Result;
use crate::models::{BucketMap, DaySpan, Window};

/// A record that occupies zero or more date spans.
///
/// A single-date record yields one [`DaySpan::single`]; a visit-bearing
/// record yields one span per visit.
pub trait DatedRecord {
    /// The spans this record occupies, in the order they should be placed.
    fn spans(&self) -> Vec<DaySpan>;
}

/// Assign every record to every window day it overlaps.
///
/// The result has exactly one key per window day, in ascending order. Within
/// a day, records keep input order; a record with several spans is placed
/// once per span, so overlapping spans of the same record put it into a day
/// more than once.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use daybucket_core::prelude::*;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap();
/// let note = Note {
///     id: "n1".into(),
///     name: "Packing list".into(),
///     content: None,
///     date: Some(Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).single().unwrap()),
/// };
///
/// let notes = [note];
/// let window = Window::new(start, 3).unwrap();
/// let buckets = bucket(&notes, &window);
///
/// assert_eq!(buckets.len(), 3);
/// assert_eq!(buckets.get("2024-01-02").unwrap().len(), 1);
/// ```
pub fn bucket<'a, R, I>(records: I, window: &Window) -> BucketMap<'a, R>
where
    R: DatedRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut map = BucketMap::with_days(window.days());

    for (position, record) in records.into_iter().enumerate() {
        for span in record.spans() {
            place_span(&mut map, record, span, position);
        }
    }

    map
}

/// Bucket records over `number_of_days` days starting at the UTC day of `start`.
///
/// Fails only when the window itself is invalid (negative day count).
pub fn bucket_records<'a, R, I>(
    records: I,
    start: DateTime<Utc>,
    number_of_days: i64,
) -> Result<BucketMap<'a, R>>
where
    R: DatedRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let window = Window::new(start, number_of_days)?;
    Ok(bucket(records, &window))
}

fn place_span<'a, R>(map: &mut BucketMap<'a, R>, record: &'a R, span: DaySpan, position: usize) {
    let Some(start) = span.start else {
        trace!(position, "span without start date skipped");
        return;
    };

    let first = day_key(start);

    match span.end {
        None => {
            if !map.place(&first, record) {
                trace!(position, day = %first, "single day outside window");
            }
        }
        Some(end) => {
            let last = day_key(end);
            let range = map.overlapping(&first, &last);

            if range.is_empty() {
                trace!(position, %first, %last, "span does not overlap window");
            }

            map.place_range(range, record);
        }
    }
}
