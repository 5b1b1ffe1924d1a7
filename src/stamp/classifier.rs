// src/stamp/classifier.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::clock::{age_secs, Clock};
use crate::fs::FileSystem;
use crate::host::EditorNotifier;
use crate::stamp::heuristic::looks_freshly_created;
use crate::stamp::naming::identifier_for_path;
use crate::types::ScriptDialect;
use crate::watch::registry::{FileRegistry, TrackedFileInfo};

/// Only files modified less than this many seconds ago can be new.
pub const RECENCY_WINDOW_SECS: f64 = 3.0;

/// What happened to one script during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Inside the plugin's own installation directory.
    Excluded,
    /// Last modified outside the recency window.
    Stale,
    /// Known file that does not look newly created.
    Existing,
    /// Content could not be read as UTF-8 text.
    Unreadable,
    /// New, but a declaration line is already present.
    AlreadyDeclared,
    /// New, but the file name yields no identifier.
    NoIdentifier,
    /// New, but writing the declaration failed.
    WriteFailed,
    /// Declaration line prepended.
    Stamped { identifier: String },
}

impl Outcome {
    pub fn is_stamped(&self) -> bool {
        matches!(self, Outcome::Stamped { .. })
    }
}

/// Decides whether a script was just created and, if so, prepends its
/// declaration line.
///
/// The classifier is stateless; everything it remembers between scans lives
/// in the [`FileRegistry`] passed to [`NewFileClassifier::process`].
#[derive(Debug, Clone)]
pub struct NewFileClassifier {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn EditorNotifier>,
    dialect: ScriptDialect,
    exclude_dir: PathBuf,
}

impl NewFileClassifier {
    /// `exclude_dir` must be comparable with the paths later passed to
    /// `process` (same root prefix).
    pub fn new(
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn EditorNotifier>,
        dialect: ScriptDialect,
        exclude_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            clock,
            notifier,
            dialect,
            exclude_dir: exclude_dir.into(),
        }
    }

    /// Classify `path`, record what was observed, and stamp it when new.
    ///
    /// The registry entry is overwritten whatever the outcome, so a file is
    /// judged against its state from the previous scan only.
    pub fn process(&self, registry: &mut FileRegistry, path: &Path) -> Outcome {
        let observed = TrackedFileInfo::observe(self.fs.as_ref(), path);
        let verdict = self.classify(path, registry.lookup(path), &observed);
        registry.update(path, observed);

        match verdict {
            Verdict::New => self.stamp(path),
            Verdict::NotNew(outcome) => outcome,
        }
    }

    fn classify(
        &self,
        path: &Path,
        previous: Option<&TrackedFileInfo>,
        observed: &TrackedFileInfo,
    ) -> Verdict {
        if path.starts_with(&self.exclude_dir) {
            return Verdict::NotNew(Outcome::Excluded);
        }

        let age = age_secs(self.clock.now(), observed.modified_secs);
        if age >= RECENCY_WINDOW_SECS {
            return Verdict::NotNew(Outcome::Stale);
        }

        let Some(previous) = previous else {
            debug!(?path, age, "first sight of a recent script");
            return Verdict::New;
        };

        if previous.size_bytes == observed.size_bytes {
            return Verdict::NotNew(Outcome::Existing);
        }

        match self.fs.read_to_string(path) {
            Ok(text) if looks_freshly_created(&text, &self.dialect) => {
                debug!(
                    ?path,
                    old_size = previous.size_bytes,
                    new_size = observed.size_bytes,
                    "size changed and content looks like a fresh stub"
                );
                Verdict::New
            }
            Ok(_) => Verdict::NotNew(Outcome::Existing),
            Err(err) => {
                debug!(?path, error = %err, "skipping unreadable script");
                Verdict::NotNew(Outcome::Unreadable)
            }
        }
    }

    /// Prepend `<declare_keyword> <Identifier>` to the script.
    ///
    /// The file is re-read here rather than reusing the classification read.
    fn stamp(&self, path: &Path) -> Outcome {
        let content = match self.fs.read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                debug!(?path, error = %err, "skipping unreadable script");
                return Outcome::Unreadable;
            }
        };

        if content
            .lines()
            .any(|line| self.dialect.is_declare_line(line.trim()))
        {
            debug!(?path, "script already declares a type name");
            return Outcome::AlreadyDeclared;
        }

        let Some(identifier) = identifier_for_path(path) else {
            debug!(?path, "file name yields no identifier");
            return Outcome::NoIdentifier;
        };

        let stamped = format!("{}{}", self.dialect.declaration_line(&identifier), content);
        if let Err(err) = self.fs.write(path, stamped.as_bytes()) {
            debug!(?path, error = %err, "could not write declaration");
            return Outcome::WriteFailed;
        }

        info!(
            ?path,
            identifier = %identifier,
            "added `{}` declaration to new script",
            self.dialect.declare_keyword
        );

        if let Err(err) = self.notifier.refresh(path) {
            debug!(?path, error = %err, "editor refresh failed");
        }

        Outcome::Stamped { identifier }
    }
}

enum Verdict {
    New,
    NotNew(Outcome),
}
