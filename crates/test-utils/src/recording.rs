use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use scriptstamp::host::EditorNotifier;

/// Editor notifier that remembers every path it was asked to refresh.
///
/// Clones share the same log, so a test can keep one clone and hand the
/// other to the scanner.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    refreshed: Arc<Mutex<Vec<PathBuf>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refreshed(&self) -> Vec<PathBuf> {
        self.refreshed.lock().unwrap().clone()
    }
}

impl EditorNotifier for RecordingNotifier {
    fn refresh(&self, path: &Path) -> anyhow::Result<()> {
        self.refreshed.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}
