//! Closed set of user-facing failures with stable exit codes.

use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

/// Fatal errors surfaced to the user. Everything else (filesystem faults,
/// malformed JSON) propagates as `anyhow` context and exits [`exit_codes::INVALID`].
#[derive(Debug, Error)]
pub enum NagError {
    /// No usable config location. The message names every attempted path.
    #[error("no config file found in {}", format_paths(.attempted))]
    MissingConfig { attempted: Vec<PathBuf> },

    /// A config record lacks a required field. Reported for the first
    /// invalid record, checked in the order interval, command, name.
    #[error("config entry {index}: no {field} specified")]
    MissingField { index: usize, field: &'static str },

    /// A config record's interval is neither an integer nor a string
    /// holding one.
    #[error("config entry {index}: interval {value:?} is not a whole number of days")]
    BadInterval { index: usize, value: String },

    /// `--name` asked for an entry the config does not declare.
    #[error("no entry named {name:?} in config")]
    UnknownEntry { name: String },
}

impl NagError {
    pub fn exit_code(&self) -> i32 {
        match self {
            NagError::UnknownEntry { .. } => exit_codes::UNKNOWN_ENTRY,
            _ => exit_codes::INVALID,
        }
    }
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
