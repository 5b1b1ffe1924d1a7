// src/watch/walk.rs

use std::path::PathBuf;

use tracing::debug;

use crate::fs::FileSystem;
use crate::watch::patterns::WatchFilter;

/// Collect every watched file under the filter's root, sorted by path.
///
/// Directories that cannot be listed are skipped together with their
/// subtree.
pub fn collect_watched_files(fs: &dyn FileSystem, filter: &WatchFilter) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![filter.root().to_path_buf()];

    while let Some(dir) = stack.pop() {
        let entries = match fs.read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(?dir, error = %err, "skipping unreadable directory");
                continue;
            }
        };

        for entry in entries {
            if entry.is_dir {
                stack.push(entry.path);
            } else if filter.is_watched(&entry.path) {
                files.push(entry.path);
            }
        }
    }

    files.sort();
    files
}
