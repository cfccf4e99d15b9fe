//! Flat calendar events for a calendar widget.
//!
//! Unlike bucketing, this does not need a window: every visit with a start
//! date becomes one event, and the widget decides what to show.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::records::Place;

/// One visit rendered as a calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    /// Id of the place the visit belongs to.
    pub id: String,
    pub start: DateTime<Utc>,
    /// Visit end, or `start` for an open-ended visit.
    pub end: DateTime<Utc>,
    /// Place name, followed by the category icon when there is one.
    pub title: String,
}

/// Build one event per dated visit, in place order then visit order.
pub fn calendar_events(places: &[Place]) -> Vec<CalendarEvent> {
    places
        .iter()
        .flat_map(|place| {
            let title = match place.icon() {
                Some(icon) => format!("{} {}", place.name, icon),
                None => place.name.clone(),
            };

            place.visits.iter().filter_map(move |visit| {
                let start = visit.start_date?;
                Some(CalendarEvent {
                    id: place.id.clone(),
                    start,
                    end: visit.end_date.unwrap_or(start),
                    title: title.clone(),
                })
            })
        })
        .collect()
}
