//! Command execution through the host shell.
//!
//! The [`CommandRunner`] trait decouples orchestration from the actual
//! shell-out so tests substitute a spy that counts invocations without
//! spawning anything.

use std::process::Command;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::entry::Entry;

/// Abstraction over running an entry's command.
pub trait CommandRunner {
    /// Execute the command, blocking until it exits.
    fn run(&self, entry: &Entry) -> Result<()>;
}

/// Runs the command line through the host shell with inherited stdio.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, entry: &Entry) -> Result<()> {
        info!(entry = %entry.name, command = %entry.command, "running command");
        let status = shell_command(&entry.command)
            .status()
            .with_context(|| format!("run command for {}", entry.name))?;
        // The exit status is logged but never surfaced: a failed command
        // still counts as attempted, and attempted is what gets recorded.
        debug!(exit_code = ?status.code(), "command finished");
        Ok(())
    }
}

fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::entry;

    #[test]
    fn failing_command_is_not_an_error() {
        let runner = ShellRunner;
        runner.run(&entry("fails", "exit 3", 1)).expect("run");
    }

    #[test]
    fn succeeding_command_runs() {
        let runner = ShellRunner;
        runner.run(&entry("ok", "true", 1)).expect("run");
    }
}
