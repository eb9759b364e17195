//! Entry store: locate and load the config file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::entry::{Entry, parse_entries};
use crate::error::NagError;
use crate::io::paths::{Env, config_candidates};

/// Load the config entries.
///
/// With an explicit path, that file is read directly (missing file is a
/// [`NagError::MissingConfig`] naming it). Otherwise the default candidates
/// are tried in order and the first that exists and holds a non-empty list
/// wins; a present-but-empty candidate falls through to the next. When no
/// candidate qualifies the error enumerates every attempted location.
pub fn load_entries(explicit: Option<&Path>, env: &Env) -> Result<Vec<Entry>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(NagError::MissingConfig {
                attempted: vec![path.to_path_buf()],
            }
            .into());
        }
        return read_entries(path);
    }

    let candidates = config_candidates(env);
    for candidate in &candidates {
        if !candidate.exists() {
            continue;
        }
        let entries = read_entries(candidate)?;
        if entries.is_empty() {
            debug!(path = %candidate.display(), "config exists but is empty, trying next");
            continue;
        }
        return Ok(entries);
    }
    Err(NagError::MissingConfig {
        attempted: candidates,
    }
    .into())
}

fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    debug!(path = %path.display(), "loading config");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    parse_entries(&contents).with_context(|| format!("in config {}", path.display()))
}
