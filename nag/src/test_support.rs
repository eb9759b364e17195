//! Test-only helpers: deterministic entries, a fixed clock, and a command spy.

use std::cell::RefCell;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};

use crate::entry::Entry;
use crate::io::command::CommandRunner;
use crate::io::history::HistoryStore;

/// Create an entry without going through config parsing.
pub fn entry(name: &str, command: &str, interval: u32) -> Entry {
    Entry {
        name: name.to_string(),
        command: command.to_string(),
        interval,
    }
}

/// Build a deterministic local timestamp for due-calculation tests.
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(hour, min, sec)
        .expect("valid time")
}

/// History store backed by a fresh temp dir. Keep the guard alive for the
/// test's duration.
pub fn temp_history() -> (tempfile::TempDir, HistoryStore) {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::new(temp.path().join("last_run.json"));
    (temp, store)
}

/// `CommandRunner` spy that records invocations instead of spawning anything.
#[derive(Default)]
pub struct CountingRunner {
    pub calls: RefCell<Vec<String>>,
}

impl CountingRunner {
    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandRunner for CountingRunner {
    fn run(&self, entry: &Entry) -> Result<()> {
        self.calls.borrow_mut().push(entry.name.clone());
        Ok(())
    }
}
