//! Sweep mode: evaluate every entry and resolve each due one interactively.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::Local;
use tracing::debug;

use crate::core::due::DueState;
use crate::entry::Entry;
use crate::io::command::CommandRunner;
use crate::io::history::HistoryStore;
use crate::io::prompt::resolve_due_entry;

/// Walk the entries in config order; not-due entries are skipped silently
/// (debug trace only), due ones go to the prompt loop.
pub fn sweep<R, W, C>(
    entries: &[Entry],
    history: &HistoryStore,
    runner: &C,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: CommandRunner,
{
    let now = Local::now().naive_local();
    for entry in entries {
        let last_run = history.last_run(&entry.name)?;
        let due = DueState::evaluate(entry, last_run, now);
        if !due.is_due() {
            debug!(entry = %entry.name, days_until = due.days_until, "not due, skipping");
            continue;
        }
        let resolution = resolve_due_entry(entry, &due, history, runner, input, output)?;
        debug!(entry = %entry.name, ?resolution, "entry resolved");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use chrono::Duration;

    use crate::test_support::{CountingRunner, entry, temp_history};

    #[test]
    fn due_entries_prompt_in_config_order() {
        let (_temp, history) = temp_history();
        let entries = vec![entry("first", "true", 1), entry("second", "true", 1)];
        let runner = CountingRunner::default();
        let mut output = Vec::new();

        sweep(
            &entries,
            &history,
            &runner,
            &mut Cursor::new(b"y\ny\n".to_vec()),
            &mut output,
        )
        .expect("sweep");

        assert_eq!(*runner.calls.borrow(), vec!["first", "second"]);
        assert!(history.last_run("first").expect("read").is_some());
        assert!(history.last_run("second").expect("read").is_some());
    }

    #[test]
    fn not_due_entries_are_skipped_silently() {
        let (_temp, history) = temp_history();
        let entries = vec![entry("fresh", "true", 7)];
        history
            .mark_run_at("fresh", Local::now().naive_local() - Duration::days(5))
            .expect("seed history");
        let runner = CountingRunner::default();
        let mut output = Vec::new();

        sweep(
            &entries,
            &history,
            &runner,
            &mut Cursor::new(Vec::new()),
            &mut output,
        )
        .expect("sweep");

        assert_eq!(runner.count(), 0);
        assert!(output.is_empty());
    }

    /// A deferred entry does not stop the sweep from reaching later ones.
    #[test]
    fn deferring_one_entry_advances_to_the_next() {
        let (_temp, history) = temp_history();
        let entries = vec![entry("skipped", "true", 1), entry("ran", "true", 1)];
        let runner = CountingRunner::default();
        let mut output = Vec::new();

        sweep(
            &entries,
            &history,
            &runner,
            &mut Cursor::new(b"n\ny\n".to_vec()),
            &mut output,
        )
        .expect("sweep");

        assert_eq!(*runner.calls.borrow(), vec!["ran"]);
        assert!(history.last_run("skipped").expect("read").is_none());
        assert!(history.last_run("ran").expect("read").is_some());
    }
}
