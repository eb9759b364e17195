//! Default file locations, computed from an injected environment value.
//!
//! The per-user directories are detected once at startup; everything after
//! that is a pure function of the [`Env`] value, so tests build an `Env`
//! pointing into a temp dir instead of touching real defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Per-user directories the default paths derive from.
#[derive(Debug, Clone)]
pub struct Env {
    pub home_dir: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
}

impl Env {
    pub fn detect() -> Self {
        Self {
            home_dir: dirs::home_dir(),
            config_dir: dirs::config_dir(),
            cache_dir: dirs::cache_dir(),
        }
    }
}

/// Default config locations, tried in order: the per-user config directory,
/// then a dotfile in the home directory.
pub fn config_candidates(env: &Env) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = &env.config_dir {
        candidates.push(dir.join("nag.json"));
    }
    if let Some(dir) = &env.home_dir {
        candidates.push(dir.join(".nag.json"));
    }
    candidates
}

/// Default run-history location in the per-user cache directory.
pub fn default_history_path(env: &Env) -> Result<PathBuf> {
    let dir = env
        .cache_dir
        .as_ref()
        .context("no cache directory for this user (set --history)")?;
    Ok(dir.join("nag").join("last_run.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(root: &std::path::Path) -> Env {
        Env {
            home_dir: Some(root.join("home")),
            config_dir: Some(root.join("config")),
            cache_dir: Some(root.join("cache")),
        }
    }

    #[test]
    fn candidates_prefer_config_dir_over_dotfile() {
        let root = PathBuf::from("/tmp/x");
        let candidates = config_candidates(&env(&root));
        assert_eq!(
            candidates,
            vec![
                root.join("config").join("nag.json"),
                root.join("home").join(".nag.json"),
            ]
        );
    }

    #[test]
    fn missing_directories_drop_out_of_candidates() {
        let partial = Env {
            home_dir: Some(PathBuf::from("/tmp/home")),
            config_dir: None,
            cache_dir: None,
        };
        let candidates = config_candidates(&partial);
        assert_eq!(candidates, vec![PathBuf::from("/tmp/home/.nag.json")]);
        assert!(default_history_path(&partial).is_err());
    }

    #[test]
    fn history_path_lives_under_the_cache_dir() {
        let root = PathBuf::from("/tmp/x");
        let path = default_history_path(&env(&root)).expect("path");
        assert_eq!(path, root.join("cache").join("nag").join("last_run.json"));
    }
}
