// src/engine/scanner.rs

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::fs::FileSystem;
use crate::host::EditorNotifier;
use crate::stamp::{NewFileClassifier, Outcome};
use crate::types::ScriptDialect;
use crate::watch::{collect_watched_files, FileRegistry, WatchFilter};

/// Where to look and what to look for.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    /// Project root; every walk starts here.
    pub root: PathBuf,
    /// Plugin installation directory, relative to `root`.
    pub install_dir: PathBuf,
    pub dialect: ScriptDialect,
}

/// Summary of one scan pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Watched scripts visited.
    pub visited: usize,
    /// Scripts that received a declaration, with the identifier used.
    pub stamped: Vec<(PathBuf, String)>,
}

/// Owns the registry and runs full passes over the watched tree.
#[derive(Debug)]
pub struct Scanner {
    fs: Arc<dyn FileSystem>,
    filter: WatchFilter,
    registry: FileRegistry,
    classifier: NewFileClassifier,
}

impl Scanner {
    pub fn new(
        settings: ScanSettings,
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn EditorNotifier>,
    ) -> Result<Self> {
        let filter = WatchFilter::new(settings.root, &settings.dialect, &settings.install_dir)?;
        let classifier = NewFileClassifier::new(
            Arc::clone(&fs),
            clock,
            notifier,
            settings.dialect,
            filter.install_dir(),
        );

        Ok(Self {
            fs,
            filter,
            registry: FileRegistry::new(),
            classifier,
        })
    }

    pub fn filter(&self) -> &WatchFilter {
        &self.filter
    }

    pub fn registry(&self) -> &FileRegistry {
        &self.registry
    }

    /// Record the current state of every watched script without touching any
    /// of them. Returns the number of scripts recorded.
    pub fn initialize(&mut self) -> usize {
        self.registry.initialize(self.fs.as_ref(), &self.filter)
    }

    /// One pass over the watched tree: classify, record, and stamp.
    pub fn scan(&mut self) -> ScanReport {
        let files = collect_watched_files(self.fs.as_ref(), &self.filter);
        let mut report = ScanReport {
            visited: files.len(),
            ..ScanReport::default()
        };

        for path in files {
            let outcome = self.classifier.process(&mut self.registry, &path);
            debug!(?path, ?outcome, "classified script");
            if let Outcome::Stamped { identifier } = outcome {
                report.stamped.push((path, identifier));
            }
        }

        if report.stamped.is_empty() {
            debug!(visited = report.visited, "scan finished");
        } else {
            info!(
                visited = report.visited,
                stamped = report.stamped.len(),
                "scan finished"
            );
        }
        report
    }
}
