//! Interactive resolution of one due entry.
//!
//! Reader and writer are injected so tests drive the loop with in-memory
//! buffers; the real caller passes locked stdin/stdout.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::actions::{self, Action};
use crate::core::due::DueState;
use crate::entry::Entry;
use crate::io::command::CommandRunner;
use crate::io::history::HistoryStore;

/// How a due entry was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Command invoked, run recorded.
    Ran,
    /// Nothing invoked, nothing recorded.
    Deferred,
    /// Run recorded without invoking the command.
    Reset,
}

/// Prompt for one due entry until a terminating action is chosen.
///
/// `?` re-displays the prompt for the same entry without touching any
/// state. End-of-input resolves as a defer: an unattended prompt must never
/// run a command, so the empty-line-means-run rule applies only to an
/// actually entered line.
pub fn resolve_due_entry<R, W, C>(
    entry: &Entry,
    due: &DueState,
    history: &HistoryStore,
    runner: &C,
    input: &mut R,
    output: &mut W,
) -> Result<Resolution>
where
    R: BufRead,
    W: Write,
    C: CommandRunner,
{
    loop {
        write!(output, "{} ", prompt_line(entry, due)).context("write prompt")?;
        output.flush().context("flush prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("read response")?;
        if read == 0 {
            debug!(entry = %entry.name, "input closed, deferring");
            writeln!(output).context("write newline")?;
            return Ok(Resolution::Deferred);
        }
        let response = line.trim_end_matches(['\n', '\r']);

        match actions::resolve(response) {
            Action::Help => {
                write!(output, "{}", actions::help_text()).context("write help")?;
            }
            Action::Run => {
                runner.run(entry)?;
                history.mark_run(&entry.name)?;
                return Ok(Resolution::Ran);
            }
            Action::Reset => {
                history.mark_run(&entry.name)?;
                return Ok(Resolution::Reset);
            }
            Action::Defer => {
                writeln!(output, "Ok, I'll nag you next time.").context("write ack")?;
                return Ok(Resolution::Deferred);
            }
        }
    }
}

fn prompt_line(entry: &Entry, due: &DueState) -> String {
    let legend = actions::legend();
    match due.days_since {
        None => format!("You have never run {}. Run now? [{legend}]", entry.name),
        Some(days) => format!(
            "It has been {days} days since you last ran {}. Run now? [{legend}]",
            entry.name
        ),
    }
}
