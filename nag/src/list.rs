//! List mode: report each entry's schedule without prompting or running.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::Local;

use crate::core::due::DueState;
use crate::entry::Entry;
use crate::io::history::HistoryStore;

/// Print one line per entry: name, last-run recency, and days until next
/// run. Pure reporting, no mutation.
pub fn list<W: Write>(entries: &[Entry], history: &HistoryStore, output: &mut W) -> Result<()> {
    let now = Local::now().naive_local();
    for entry in entries {
        let due = DueState::evaluate(entry, history.last_run(&entry.name)?, now);
        writeln!(output, "{}", render_line(entry, &due)).context("write list line")?;
    }
    Ok(())
}

fn render_line(entry: &Entry, due: &DueState) -> String {
    match due.days_since {
        None => format!("{}: never run, due now", entry.name),
        Some(days) => {
            if due.is_due() {
                format!("{}: last run {days} days ago, due now", entry.name)
            } else {
                // Clamped for display only; the due decision uses the raw value.
                let until = due.days_until.max(0);
                format!("{}: last run {days} days ago, due in {until} days", entry.name)
            }
        }
    }
}
