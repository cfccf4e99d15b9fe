use std::fmt;
use std::fs;
use std::io::{self, Read};

use anyhow::Context;
use chrono::{DateTime, Utc};
use daybucket_core::{Checklist, Note, Place, Transportation};
use serde::de::DeserializeOwned;

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Places,
    Transportations,
    Notes,
    Checklists,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Places => write!(f, "places"),
            RecordKind::Transportations => write!(f, "transportations"),
            RecordKind::Notes => write!(f, "notes"),
            RecordKind::Checklists => write!(f, "checklists"),
        }
    }
}

pub fn parse_kind(s: &str) -> CliResult<RecordKind> {
    match s.to_lowercase().as_str() {
        "places" => Ok(RecordKind::Places),
        "transportations" => Ok(RecordKind::Transportations),
        "notes" => Ok(RecordKind::Notes),
        "checklists" => Ok(RecordKind::Checklists),
        _ => Err(CliError::input(format!(
            "Invalid kind '{}'. Expected: places, transportations, notes, checklists",
            s
        ))),
    }
}

pub fn parse_date_arg(name: &str, value: &str) -> CliResult<DateTime<Utc>> {
    daybucket_core::parse_date(value)
        .map_err(|e| CliError::input(format!("Invalid {} date: {}", name, e)))
}

/// Read the whole input, from stdin when `path` is `-`.
pub fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read file '{}'", path))
}

pub fn parse_records<T: DeserializeOwned>(input: &str) -> CliResult<Vec<T>> {
    serde_json::from_str(input)
        .map_err(|e| CliError::input(format!("Invalid record JSON: {}", e)))
}

/// Short human-readable name of a record, for text output.
pub trait RecordLabel {
    fn label(&self) -> &str;
}

impl RecordLabel for Place {
    fn label(&self) -> &str {
        &self.name
    }
}

impl RecordLabel for Transportation {
    fn label(&self) -> &str {
        &self.name
    }
}

impl RecordLabel for Note {
    fn label(&self) -> &str {
        &self.name
    }
}

impl RecordLabel for Checklist {
    fn label(&self) -> &str {
        &self.name
    }
}
