#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use scriptstamp::clock::SystemClock;
use scriptstamp::engine::{ScanSettings, Scanner};
use scriptstamp::fs::RealFileSystem;
use scriptstamp::types::ScriptDialect;
use tempfile::TempDir;

use crate::recording::RecordingNotifier;

/// Default plugin install dir used by test projects.
pub const INSTALL_DIR: &str = "addons/scriptstamp";

/// A throwaway project directory on the real filesystem.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Absolute (canonical) project root.
    pub fn root(&self) -> PathBuf {
        self.dir
            .path()
            .canonicalize()
            .unwrap_or_else(|_| self.dir.path().to_path_buf())
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write (or overwrite) a file, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("creating parent dirs");
        }
        fs::write(&path, content).expect("writing test file");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("reading test file")
    }

    /// Scanner over this project with the real clock and filesystem.
    pub fn scanner(&self, dialect: ScriptDialect, notifier: RecordingNotifier) -> Scanner {
        Scanner::new(
            ScanSettings {
                root: self.root(),
                install_dir: PathBuf::from(INSTALL_DIR),
                dialect,
            },
            Arc::new(RealFileSystem),
            Arc::new(SystemClock),
            Arc::new(notifier),
        )
        .expect("building scanner")
    }
}

/// Builder for `TestProject` to simplify test setup.
pub struct ProjectBuilder {
    files: Vec<(String, String)>,
}

impl ProjectBuilder {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    pub fn with_file(mut self, rel: &str, content: &str) -> Self {
        self.files.push((rel.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestProject {
        let project = TestProject {
            dir: tempfile::tempdir().expect("creating temp dir"),
        };
        for (rel, content) in &self.files {
            project.write(rel, content);
        }
        project
    }
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The placeholder dialect used in documentation examples:
/// `declare Foo` / `inherits Node` in `*.ext` files.
pub fn ext_dialect() -> ScriptDialect {
    ScriptDialect {
        extension: "ext".to_string(),
        declare_keyword: "declare".to_string(),
        inherit_keyword: "inherits".to_string(),
        comment_prefix: "#".to_string(),
    }
}
