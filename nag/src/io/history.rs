//! Run-history store: persisted last-run timestamps keyed by entry name.
//!
//! The backing file is a single JSON object mapping entry name to a local
//! ISO-8601 timestamp with microseconds and no timezone offset. Absence of
//! the file, or of a name, means "never run" and is a normal state, not an
//! error. Every update is a read-modify-write of the whole mapping with no
//! lock across the window: two racing invocations can lose an update (last
//! writer wins). Accepted limitation of a single-user tool.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use tracing::debug;

/// Written with fixed microsecond precision; parsed with `%.f` so hand-edited
/// files with shorter fractions still load.
const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const READ_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// The only component permitted to read or write the backing file.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last recorded run for `name`, or `None` when the backing file does
    /// not exist or lacks the name.
    pub fn last_run(&self, name: &str) -> Result<Option<NaiveDateTime>> {
        let map = self.read_map()?;
        let Some(raw) = map.get(name) else {
            return Ok(None);
        };
        let when = NaiveDateTime::parse_from_str(raw, READ_FORMAT).with_context(|| {
            format!(
                "invalid timestamp {:?} for {} in {}",
                raw,
                name,
                self.path.display()
            )
        })?;
        Ok(Some(when))
    }

    /// Record `name` as run at the current local wall-clock time.
    pub fn mark_run(&self, name: &str) -> Result<()> {
        self.mark_run_at(name, Local::now().naive_local())
    }

    /// Record `name` as run at `when`. Reads the current mapping (empty if
    /// the file is absent), sets the one key, creates the parent directory
    /// hierarchy on first write, and rewrites the whole mapping.
    pub fn mark_run_at(&self, name: &str, when: NaiveDateTime) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(name.to_string(), when.format(WRITE_FORMAT).to_string());
        debug!(path = %self.path.display(), name, "writing run history");
        let mut buf = serde_json::to_string_pretty(&map)?;
        buf.push('\n');
        write_atomic(&self.path, &buf)
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("read run history {}", self.path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parse run history {}", self.path.display()))
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("history path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp history {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace history {}", path.display()))?;
    Ok(())
}
