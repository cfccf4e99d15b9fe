//! Record kinds and their date spans.
//!
//! The record shapes mirror the JSON served by the travel-log API. Every
//! date field goes through [`deserialize_lenient_date`], so a bad date never
//! fails the whole payload; the record simply lands in no bucket for it.
//!
//! | Kind             | Variant     | Spans                          |
//! |------------------|-------------|--------------------------------|
//! | [`Place`]        | range       | one per visit                  |
//! | [`Transportation`] | range     | `date` to optional `end_date`  |
//! | [`Note`]         | single-date | `date`                         |
//! | [`Checklist`]    | single-date | `date`                         |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bucket::DatedRecord;
use crate::models::DaySpan;
use crate::parse::deserialize_lenient_date;

/// Category of a place, carrying its display icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One visit to a place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Visit {
    pub fn span(&self) -> DaySpan {
        DaySpan::range(self.start_date, self.end_date)
    }
}

/// A visit-bearing place (a brewery, a sight, a lodging).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub visits: Vec<Visit>,
}

impl Place {
    /// The category icon, if the place has one.
    pub fn icon(&self) -> Option<&str> {
        self.category
            .as_ref()
            .and_then(|category| category.icon.as_deref())
            .filter(|icon| !icon.is_empty())
    }
}

impl DatedRecord for Place {
    fn spans(&self) -> Vec<DaySpan> {
        self.visits.iter().map(Visit::span).collect()
    }
}

/// A transportation leg, optionally with an arrival or return date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transportation {
    pub id: String,
    pub name: String,
    /// Mode of travel (`"train"`, `"plane"`, ...). A `null` reads as absent.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_location: Option<String>,
}

impl DatedRecord for Transportation {
    fn spans(&self) -> Vec<DaySpan> {
        vec![DaySpan::range(self.date, self.end_date)]
    }
}

/// A dated note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
}

impl DatedRecord for Note {
    fn spans(&self) -> Vec<DaySpan> {
        vec![DaySpan::single(self.date)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub name: String,
    #[serde(default)]
    pub is_checked: bool,
}

/// A dated checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: String,
    pub name: String,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

impl DatedRecord for Checklist {
    fn spans(&self) -> Vec<DaySpan> {
        vec![DaySpan::single(self.date)]
    }
}
