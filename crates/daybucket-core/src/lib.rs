//! # daybucket-core
//!
//! Calendar-day bucketing for dated travel records.
//!
//! Given a list of records and a window of consecutive calendar days, this
//! library assigns every record to every day it overlaps, producing a
//! day-ordered map a calendar or itinerary view can render directly.
//!
//! ## Features
//!
//! - **One algorithm, many kinds**: places with visits, transportation legs,
//!   notes and checklists all go through the same [`bucket`] function via
//!   the [`DatedRecord`] trait.
//! - **UTC day boundaries**: every date is truncated to its UTC calendar day,
//!   independent of the caller's local timezone.
//! - **Best effort**: missing or unparsable dates are skipped, never errors.
//! - **Exports**: flat calendar events and iCalendar documents for visits.
//!
//! ## Example
//!
//! ```rust
//! use daybucket_core::prelude::*;
//!
//! let places: Vec<Place> = serde_json::from_str(r#"[
//!     {"id": "p1", "name": "Hop House",
//!      "visits": [{"start_date": "2023-12-31", "end_date": "2024-01-02"}]}
//! ]"#).unwrap();
//!
//! let start = parse_date("2024-01-01").unwrap();
//! let buckets = bucket_records(&places, start, 3).unwrap();
//!
//! for (day, records) in buckets.iter() {
//!     println!("{day}: {} record(s)", records.len());
//! }
//! ```

pub mod bucket;
pub mod day;
pub mod error;
pub mod events;
pub mod ics;
pub mod models;
pub mod parse;
pub mod records;

// Re-export commonly used types at the crate root
pub use bucket::{DatedRecord, bucket, bucket_records};
pub use error::{DayBucketError, Result};
pub use events::{CalendarEvent, calendar_events};
pub use ics::{Organizer, render_ics};
pub use models::{BucketMap, DayBucket, DaySpan, Window};
pub use parse::{parse_date, parse_date_lenient};
pub use records::{Category, Checklist, ChecklistItem, Note, Place, Transportation, Visit};

/// Prelude module for convenient imports.
///
/// ```
/// use daybucket_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bucket::{DatedRecord, bucket, bucket_records};
    pub use crate::day::day_key;
    pub use crate::error::{DayBucketError, Result};
    pub use crate::events::{CalendarEvent, calendar_events};
    pub use crate::ics::{Organizer, render_ics};
    pub use crate::models::*;
    pub use crate::parse::{parse_date, parse_date_lenient};
    pub use crate::records::*;
}
