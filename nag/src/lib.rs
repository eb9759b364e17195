//! Interactive reminder runner for recurring shell commands.
//!
//! A JSON config declares named entries, each bound to a shell command and a
//! recurrence interval in days. A JSON history file records when each entry
//! last ran. On invocation the default sweep walks the entries in config
//! order, skips the ones that are not yet due, and prompts for each due one:
//! run it, defer it, or mark it run without running it. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (due calculation, the response
//!   action table). No I/O; the clock and terminal are injected by callers.
//! - **[`io`]**: Side-effecting operations (config and history files, shell
//!   commands, the interactive prompt loop). Isolated to enable fakes in
//!   tests.
//!
//! Orchestration modules ([`sweep`], [`run_by_name`], [`list`]) coordinate
//! core logic with I/O to implement the CLI modes.

pub mod core;
pub mod entry;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod list;
pub mod logging;
pub mod run_by_name;
pub mod sweep;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
