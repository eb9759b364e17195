//! Due calculation for one entry at one instant.

use chrono::NaiveDateTime;

use crate::entry::Entry;

/// Derived view of an entry's schedule. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueState {
    /// Whole days since the last recorded run, `None` when never run.
    /// Elapsed time is truncated to whole days before any comparison.
    pub days_since: Option<i64>,
    /// `interval - days_since`; zero or negative means overdue. `0` sentinel
    /// when never run. Callers clamp to 0 for display only.
    pub days_until: i64,
}

impl DueState {
    pub fn evaluate(entry: &Entry, last_run: Option<NaiveDateTime>, now: NaiveDateTime) -> Self {
        match last_run {
            None => Self {
                days_since: None,
                days_until: 0,
            },
            Some(last) => {
                let days = now.signed_duration_since(last).num_days();
                Self {
                    days_since: Some(days),
                    days_until: i64::from(entry.interval) - days,
                }
            }
        }
    }

    pub fn never_run(&self) -> bool {
        self.days_since.is_none()
    }

    /// An entry with no recorded run is always due; otherwise due iff the
    /// truncated day count has reached the interval.
    pub fn is_due(&self) -> bool {
        match self.days_since {
            None => true,
            Some(_) => self.days_until <= 0,
        }
    }
}
