// src/watch/patterns.rs

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::types::ScriptDialect;
use crate::watch::path_utils::relative_str;

/// Decides which files under the project root are watched scripts, and
/// which of them belong to the plugin itself.
///
/// Patterns are evaluated against root-relative, forward-slash paths
/// (e.g. `"scripts/player.gd"`).
#[derive(Clone)]
pub struct WatchFilter {
    root: PathBuf,
    install_dir: PathBuf,
    watch_set: GlobSet,
}

impl fmt::Debug for WatchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchFilter")
            .field("root", &self.root)
            .field("install_dir", &self.install_dir)
            .finish_non_exhaustive()
    }
}

impl WatchFilter {
    /// Build a filter for `*.<extension>` scripts under `root`.
    ///
    /// `install_dir` is relative to `root`.
    pub fn new(root: impl Into<PathBuf>, dialect: &ScriptDialect, install_dir: &Path) -> Result<Self> {
        let root = root.into();
        let pattern = format!("**/*.{}", dialect.extension);
        let watch_set = build_globset(&[pattern])
            .with_context(|| format!("building watch globset for *.{}", dialect.extension))?;

        Ok(Self {
            install_dir: root.join(install_dir),
            root,
            watch_set,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute (root-joined) plugin installation directory.
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Returns true if the root-relative path is a watched script.
    pub fn matches(&self, rel_path: &str) -> bool {
        self.watch_set.is_match(rel_path)
    }

    /// Returns true if `path` lies under the root and is a watched script.
    pub fn is_watched(&self, path: &Path) -> bool {
        relative_str(&self.root, path).is_some_and(|rel| self.matches(&rel))
    }

    /// Returns true if `path` lies inside the plugin's own installation.
    pub fn is_excluded(&self, path: &Path) -> bool {
        path.starts_with(&self.install_dir)
    }
}

/// Build a GlobSet from simple string patterns.
fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = Glob::new(pat).with_context(|| format!("invalid glob pattern: {pat}"))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}
