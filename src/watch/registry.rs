// src/watch/registry.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::fs::FileSystem;
use crate::watch::patterns::WatchFilter;
use crate::watch::walk::collect_watched_files;

/// Last observed state of one watched script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFileInfo {
    pub path: PathBuf,
    /// Whole seconds since the Unix epoch, host clock.
    pub modified_secs: u64,
    pub size_bytes: u64,
}

impl TrackedFileInfo {
    /// Stat `path` right now. Unreadable metadata is recorded as zero.
    pub fn observe(fs: &dyn FileSystem, path: &Path) -> Self {
        let modified_secs = fs.modified_secs(path).unwrap_or_else(|err| {
            debug!(?path, error = %err, "could not read modification time");
            0
        });
        let size_bytes = fs.size(path).unwrap_or_else(|err| {
            debug!(?path, error = %err, "could not read size");
            0
        });
        Self {
            path: path.to_path_buf(),
            modified_secs,
            size_bytes,
        }
    }
}

/// In-memory record of every watched script's last-known time and size.
///
/// Entries are never removed; a deleted script keeps its stale entry until
/// the process exits.
#[derive(Debug, Default)]
pub struct FileRegistry {
    files: HashMap<PathBuf, TrackedFileInfo>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Record every watched file under the filter's root.
    ///
    /// Existing entries for other paths are kept. Returns the number of files
    /// recorded by this call.
    pub fn initialize(&mut self, fs: &dyn FileSystem, filter: &WatchFilter) -> usize {
        let files = collect_watched_files(fs, filter);
        let count = files.len();
        for path in files {
            let info = TrackedFileInfo::observe(fs, &path);
            self.files.insert(path, info);
        }
        debug!(count, root = ?filter.root(), "registry initialised");
        count
    }

    pub fn lookup(&self, path: &Path) -> Option<&TrackedFileInfo> {
        self.files.get(path)
    }

    /// Insert or overwrite the entry for `path`.
    pub fn update(&mut self, path: &Path, info: TrackedFileInfo) {
        self.files.insert(path.to_path_buf(), info);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;
    use crate::types::ScriptDialect;

    fn filter() -> WatchFilter {
        WatchFilter::new(".", &ScriptDialect::gdscript(), Path::new("addons/scriptstamp")).unwrap()
    }

    #[test]
    fn initialize_records_only_watched_files() {
        let fs = MockFileSystem::new();
        fs.add_file_at("./player.gd", "extends Node\n", 100);
        fs.add_file_at("./scenes/level.gd", "", 200);
        fs.add_file_at("./scenes/level.tscn", "[gd_scene]", 300);

        let mut registry = FileRegistry::new();
        assert_eq!(registry.initialize(&fs, &filter()), 2);
        assert_eq!(registry.len(), 2);

        let player = registry.lookup(Path::new("./player.gd")).unwrap();
        assert_eq!(player.modified_secs, 100);
        assert_eq!(player.size_bytes, 13);
        assert!(registry.lookup(Path::new("./scenes/level.tscn")).is_none());
    }

    #[test]
    fn initialize_keeps_entries_outside_root() {
        let fs = MockFileSystem::new();
        fs.add_file("./a.gd", "");

        let mut registry = FileRegistry::new();
        let elsewhere = PathBuf::from("/other/b.gd");
        registry.update(
            &elsewhere,
            TrackedFileInfo {
                path: elsewhere.clone(),
                modified_secs: 1,
                size_bytes: 1,
            },
        );
        registry.initialize(&fs, &filter());

        assert_eq!(registry.len(), 2);
        assert!(registry.lookup(&elsewhere).is_some());
    }

    #[test]
    fn update_overwrites_unconditionally() {
        let mut registry = FileRegistry::new();
        let path = PathBuf::from("./a.gd");
        for size in [10, 5] {
            registry.update(
                &path,
                TrackedFileInfo {
                    path: path.clone(),
                    modified_secs: 7,
                    size_bytes: size,
                },
            );
        }
        assert_eq!(registry.lookup(&path).unwrap().size_bytes, 5);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn observe_missing_file_records_zeroes() {
        let fs = MockFileSystem::new();
        let info = TrackedFileInfo::observe(&fs, Path::new("./gone.gd"));
        assert_eq!(info.size_bytes, 0);
        assert_eq!(info.modified_secs, 0);
    }
}
