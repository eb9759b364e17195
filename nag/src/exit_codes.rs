//! Stable exit codes for nag CLI invocations.

/// Command completed, including "nothing due" sweeps and deferred entries.
pub const OK: i32 = 0;
/// Missing or invalid configuration, or any other fatal error.
pub const INVALID: i32 = 1;
/// `--name` did not match any configured entry.
pub const UNKNOWN_ENTRY: i32 = 2;
