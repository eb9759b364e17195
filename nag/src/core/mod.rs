//! Pure, deterministic logic: due calculation and the response action table.
//!
//! Nothing here performs I/O or reads the real clock; callers inject `now`
//! and the terminal, which keeps every rule testable in isolation.

pub mod actions;
pub mod due;
