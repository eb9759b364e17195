//! Config entries: one named recurring task bound to a shell command.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::error::NagError;

/// One trackable recurring task.
///
/// Entries are immutable once loaded and live for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Display label and lookup key. Uniqueness is not enforced; lookups
    /// return the first match in config order.
    pub name: String,
    /// Opaque shell command line, handed to the shell untouched.
    pub command: String,
    /// Minimum whole days that must elapse after a run before the entry is
    /// due again.
    pub interval: u32,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    name: Option<String>,
    command: Option<String>,
    interval: Option<RawInterval>,
}

/// Config files in the wild hold intervals both as numbers and as strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawInterval {
    Days(u32),
    Text(String),
}

/// Parse a JSON array of config records.
///
/// Each record is validated as the list is built, so the first invalid
/// record reports immediately without attempting later records. Unknown
/// fields are ignored.
pub fn parse_entries(raw: &str) -> Result<Vec<Entry>> {
    let records: Vec<Value> = serde_json::from_str(raw).context("config is not a JSON array")?;
    let mut entries = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        entries.push(entry_from_record(index, record)?);
    }
    Ok(entries)
}

fn entry_from_record(index: usize, record: Value) -> Result<Entry> {
    let raw: RawRecord = serde_json::from_value(record)
        .with_context(|| format!("config entry {index} is malformed"))?;
    let interval = raw.interval.ok_or(NagError::MissingField {
        index,
        field: "interval",
    })?;
    let command = raw.command.ok_or(NagError::MissingField {
        index,
        field: "command",
    })?;
    let name = raw.name.ok_or(NagError::MissingField {
        index,
        field: "name",
    })?;
    let interval = match interval {
        RawInterval::Days(days) => days,
        RawInterval::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| NagError::BadInterval { index, value: text })?,
    };
    Ok(Entry {
        name,
        command,
        interval,
    })
}

/// Linear scan, first match wins, order = config order.
pub fn find_entry<'a>(entries: &'a [Entry], name: &str) -> Option<&'a Entry> {
    entries.iter().find(|entry| entry.name == name)
}
