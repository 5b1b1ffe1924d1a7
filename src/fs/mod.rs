// src/fs/mod.rs

//! Filesystem provider used by the registry and the classifier.
//!
//! Everything that touches disk goes through [`FileSystem`] so the novelty
//! rules can be exercised against [`mock::MockFileSystem`] with fully
//! controlled timestamps.

use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use anyhow::{Context, Result};
use tracing::debug;

pub mod mock;

/// One child of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Full path of the child (parent joined with the entry name).
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Abstract filesystem interface.
pub trait FileSystem: Send + Sync + Debug {
    /// List the direct children of a directory.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    /// Replace the whole content of `path`.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    /// Modification time in whole seconds since the Unix epoch.
    fn modified_secs(&self, path: &Path) -> Result<u64>;
    fn size(&self, path: &Path) -> Result<u64>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let entries = fs::read_dir(path)
            .with_context(|| format!("reading dir {:?}", path))?
            .filter_map(|entry| listed_entry(path, entry))
            .collect();
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("reading file {:?}", path))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).with_context(|| format!("writing file {:?}", path))
    }

    fn modified_secs(&self, path: &Path) -> Result<u64> {
        let modified = fs::metadata(path)
            .with_context(|| format!("reading metadata of {:?}", path))?
            .modified()
            .with_context(|| format!("reading modification time of {:?}", path))?;
        // Timestamps before the epoch are clamped to zero.
        Ok(modified
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0))
    }

    fn size(&self, path: &Path) -> Result<u64> {
        let meta = fs::metadata(path).with_context(|| format!("reading metadata of {:?}", path))?;
        Ok(meta.len())
    }
}

/// One entry of a real directory listing. Entries that vanish or cannot be
/// typed mid-listing (editor swap files, for instance) are skipped so the
/// rest of the directory is still scanned.
fn listed_entry(dir: &Path, entry: io::Result<fs::DirEntry>) -> Option<DirEntry> {
    let entry = match entry {
        Ok(entry) => entry,
        Err(err) => {
            debug!(?dir, error = %err, "skipping unreadable directory entry");
            return None;
        }
    };
    match entry.file_type() {
        Ok(file_type) => Some(DirEntry {
            path: entry.path(),
            is_dir: file_type.is_dir(),
        }),
        Err(err) => {
            debug!(path = ?entry.path(), error = %err, "skipping entry with unknown file type");
            None
        }
    }
}
