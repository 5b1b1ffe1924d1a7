// src/fs/mock.rs

use super::{DirEntry, FileSystem};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File {
        content: Vec<u8>,
        modified_secs: u64,
        read_only: bool,
    },
    Dir(Vec<String>), // List of child names
}

/// In-memory filesystem for tests.
///
/// Writes keep the entry's modification time; tests move time explicitly with
/// [`MockFileSystem::set_modified`].
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut files = HashMap::new();
        // Ensure root exists
        files.insert(PathBuf::from("."), MockEntry::Dir(Vec::new()));

        Self {
            files: Arc::new(Mutex::new(files)),
        }
    }

    /// Add (or replace) a file with modification time 0.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.add_file_at(path, content, 0);
    }

    /// Add (or replace) a file with the given modification time.
    pub fn add_file_at(
        &self,
        path: impl AsRef<Path>,
        content: impl Into<Vec<u8>>,
        modified_secs: u64,
    ) {
        let path = path.as_ref().to_path_buf();
        let mut files = self.lock();
        files.insert(
            path.clone(),
            MockEntry::File {
                content: content.into(),
                modified_secs,
                read_only: false,
            },
        );
        link_to_parent(&mut files, &path);
    }

    /// Create an empty directory (and its parents).
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut files = self.lock();
        ensure_dir_entry(&mut files, path.as_ref());
    }

    pub fn set_modified(&self, path: impl AsRef<Path>, secs: u64) {
        if let Some(MockEntry::File { modified_secs, .. }) = self.lock().get_mut(path.as_ref()) {
            *modified_secs = secs;
        }
    }

    /// Make every subsequent `write` to `path` fail.
    pub fn set_read_only(&self, path: impl AsRef<Path>) {
        if let Some(MockEntry::File { read_only, .. }) = self.lock().get_mut(path.as_ref()) {
            *read_only = true;
        }
    }

    /// Current content of a file, if it exists and is valid UTF-8.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.lock().get(path.as_ref()) {
            Some(MockEntry::File { content, .. }) => String::from_utf8(content.clone()).ok(),
            _ => None,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, MockEntry>> {
        // A poisoned lock only happens after a panicking test; keep going.
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn normalized_parent(path: &Path) -> Option<&Path> {
    path.parent().map(|parent| {
        if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        }
    })
}

fn link_to_parent(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
    let Some(parent) = normalized_parent(path) else {
        return;
    };
    if parent == path {
        return;
    }
    ensure_dir_entry(files, parent);
    if let (Some(MockEntry::Dir(children)), Some(name)) = (
        files.get_mut(parent),
        path.file_name().and_then(|n| n.to_str()),
    ) {
        if !children.iter().any(|c| c == name) {
            children.push(name.to_string());
        }
    }
}

fn ensure_dir_entry(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
    if files.contains_key(path) {
        return;
    }
    files.insert(path.to_path_buf(), MockEntry::Dir(Vec::new()));
    link_to_parent(files, path);
}

impl FileSystem for MockFileSystem {
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let files = self.lock();
        match files.get(path) {
            Some(MockEntry::Dir(children)) => Ok(children
                .iter()
                .map(|name| {
                    let child = path.join(name);
                    let is_dir = matches!(files.get(&child), Some(MockEntry::Dir(_)));
                    DirEntry { path: child, is_dir }
                })
                .collect()),
            _ => Err(anyhow!("Not a directory or not found: {:?}", path)),
        }
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        match self.lock().get(path) {
            Some(MockEntry::File { content, .. }) => {
                String::from_utf8(content.clone()).map_err(|e| anyhow!("Invalid UTF-8: {}", e))
            }
            Some(MockEntry::Dir(_)) => Err(anyhow!("Is a directory: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let mut files = self.lock();
        match files.get_mut(path) {
            Some(MockEntry::File { read_only: true, .. }) => {
                Err(anyhow!("Permission denied: {:?}", path))
            }
            Some(MockEntry::File { content, .. }) => {
                *content = contents.to_vec();
                Ok(())
            }
            Some(MockEntry::Dir(_)) => Err(anyhow!("Is a directory: {:?}", path)),
            None => {
                files.insert(
                    path.to_path_buf(),
                    MockEntry::File {
                        content: contents.to_vec(),
                        modified_secs: 0,
                        read_only: false,
                    },
                );
                link_to_parent(&mut files, path);
                Ok(())
            }
        }
    }

    fn modified_secs(&self, path: &Path) -> Result<u64> {
        match self.lock().get(path) {
            Some(MockEntry::File { modified_secs, .. }) => Ok(*modified_secs),
            Some(MockEntry::Dir(_)) => Ok(0),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn size(&self, path: &Path) -> Result<u64> {
        match self.lock().get(path) {
            Some(MockEntry::File { content, .. }) => Ok(content.len() as u64),
            Some(MockEntry::Dir(_)) => Ok(0),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_files_create_parent_dirs() {
        let fs = MockFileSystem::new();
        fs.add_file("./scripts/enemies/goblin.gd", "extends Node\n");

        let top = fs.read_dir(Path::new(".")).unwrap();
        assert_eq!(
            top,
            vec![DirEntry {
                path: PathBuf::from("./scripts"),
                is_dir: true
            }]
        );

        let leaf = fs.read_dir(Path::new("./scripts/enemies")).unwrap();
        assert_eq!(leaf.len(), 1);
        assert!(!leaf[0].is_dir);
    }

    #[test]
    fn read_only_files_reject_writes() {
        let fs = MockFileSystem::new();
        fs.add_file_at("./a.gd", "", 42);
        fs.set_read_only("./a.gd");

        assert!(fs.write(Path::new("./a.gd"), b"x").is_err());
        assert_eq!(fs.contents("./a.gd").as_deref(), Some(""));
        assert_eq!(fs.modified_secs(Path::new("./a.gd")).unwrap(), 42);
    }
}
