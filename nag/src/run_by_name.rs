//! Single-entry mode: run one named entry unconditionally.

use anyhow::Result;
use tracing::debug;

use crate::entry::{Entry, find_entry};
use crate::error::NagError;
use crate::io::command::CommandRunner;
use crate::io::history::HistoryStore;

/// Run `name` without prompting and without a due check: an explicit
/// request always runs. Unknown names fail before any state changes.
pub fn run_by_name<C: CommandRunner>(
    entries: &[Entry],
    history: &HistoryStore,
    runner: &C,
    name: &str,
) -> Result<()> {
    let entry = find_entry(entries, name).ok_or_else(|| NagError::UnknownEntry {
        name: name.to_string(),
    })?;
    debug!(entry = %entry.name, "running by name");
    runner.run(entry)?;
    history.mark_run(&entry.name)?;
    Ok(())
}
