//! iCalendar (RFC 5545) export of place visits.
//!
//! Each visit with a start date becomes an all-day `VEVENT`. iCalendar
//! all-day events use an exclusive end, so `DTEND` is the day after the
//! visit's last day.

use chrono::{DateTime, Utc};

use crate::day::{add_days, format_ics_date, format_ics_timestamp, truncate_to_day};
use crate::records::{Place, Visit};

/// Product identifier written into every calendar.
pub const PRODID: &str = "-//daybucket//Travel Calendar//EN";

/// Maximum octets per content line before folding.
const MAX_LINE_OCTETS: usize = 75;

/// Calendar owner written as the `ORGANIZER` of every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organizer {
    pub name: String,
    pub email: String,
}

/// Render the visits of `places` as an iCalendar document.
///
/// `stamp` is used for `DTSTAMP`, `CREATED` and `LAST-MODIFIED`, so the
/// output depends only on the arguments.
pub fn render_ics(places: &[Place], stamp: DateTime<Utc>, organizer: Option<&Organizer>) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        format!("PRODID:{}", PRODID),
        "VERSION:2.0".to_string(),
    ];

    for place in places {
        for (index, visit) in place.visits.iter().enumerate() {
            lines.extend(render_event(place, index, visit, stamp, organizer));
        }
    }

    lines.push("END:VCALENDAR".to_string());

    let mut out = String::new();
    for line in &lines {
        for folded in fold_line(line) {
            out.push_str(&folded);
            out.push_str("\r\n");
        }
    }
    out
}

fn render_event(
    place: &Place,
    index: usize,
    visit: &Visit,
    stamp: DateTime<Utc>,
    organizer: Option<&Organizer>,
) -> Vec<String> {
    let Some(start) = visit.start_date else {
        return Vec::new();
    };

    let first = truncate_to_day(start);
    // An end before the start collapses to a one-day event.
    let last = visit.end_date.map(truncate_to_day).unwrap_or(first).max(first);
    let Some(exclusive_end) = add_days(last, 1) else {
        return Vec::new();
    };

    let stamp = format_ics_timestamp(&stamp);
    let mut lines = vec![
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}-{}@daybucket", escape_text(&place.id), index),
        format!("SUMMARY:{}", escape_text(&place.name)),
        format!("DTSTART;VALUE=DATE:{}", format_ics_date(first)),
        format!("DTEND;VALUE=DATE:{}", format_ics_date(exclusive_end)),
        format!("DTSTAMP:{}", stamp),
        "TRANSP:TRANSPARENT".to_string(),
        "CLASS:PUBLIC".to_string(),
        format!("CREATED:{}", stamp),
        format!("LAST-MODIFIED:{}", stamp),
    ];

    if let Some(description) = place.description.as_deref() {
        lines.push(format!("DESCRIPTION:{}", escape_text(description)));
    }
    if let Some(location) = place.location.as_deref() {
        lines.push(format!("LOCATION:{}", escape_text(location)));
    }
    if let Some(link) = place.link.as_deref() {
        lines.push(format!("URL:{}", strip_controls(link)));
    }
    if let Some(organizer) = organizer {
        lines.push(format!(
            "ORGANIZER;CN={}:MAILTO:{}",
            quote_param(&organizer.name),
            strip_controls(&organizer.email)
        ));
    }

    lines.push("END:VEVENT".to_string());
    lines
}

/// Escape a TEXT value.
fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Drop control characters from a URI value. A raw CR or LF would end the
/// content line.
fn strip_controls(value: &str) -> String {
    value.chars().filter(|c| !c.is_control()).collect()
}

/// Quote a parameter value when it contains `:`, `;` or `,`. Quoted values
/// may hold neither `"` nor control characters, so both are dropped.
fn quote_param(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| *c != '"' && !c.is_control())
        .collect();
    if cleaned.contains([':', ';', ',']) {
        format!("\"{}\"", cleaned)
    } else {
        cleaned
    }
}

/// Split a content line into folded physical lines of at most 75 octets.
/// Continuation lines start with a single space.
fn fold_line(line: &str) -> Vec<String> {
    let mut folded = Vec::new();
    let mut current = String::new();

    for c in line.chars() {
        if current.len() + c.len_utf8() > MAX_LINE_OCTETS {
            folded.push(std::mem::take(&mut current));
            current.push(' ');
        }
        current.push(c);
    }

    folded.push(current);
    folded
}
