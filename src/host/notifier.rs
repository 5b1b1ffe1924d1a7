// src/host/notifier.rs

use std::fmt::Debug;
use std::path::Path;
use std::process::Stdio;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result};
use tokio::process::Command;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Environment variable carrying the rewritten script's path to a reload
/// command.
pub const PATH_ENV: &str = "SCRIPTSTAMP_PATH";

/// Asks the host editor to reload any open view of a file from disk.
///
/// Calls are fire-and-forget: an `Err` is logged by the caller and otherwise
/// ignored.
pub trait EditorNotifier: Send + Sync + Debug {
    fn refresh(&self, path: &Path) -> Result<()>;
}

/// Notifier used when no editor is attached: it only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl EditorNotifier for LogNotifier {
    fn refresh(&self, path: &Path) -> Result<()> {
        info!(?path, "script rewritten on disk; reload it in your editor");
        Ok(())
    }
}

/// Runs a shell command for every rewritten script, with the script path in
/// [`PATH_ENV`].
///
/// The command is spawned on the current Tokio runtime and never awaited by
/// the scan. Spawned commands are kept in a [`JoinSet`] so that
/// [`CommandNotifier::drain`] can wait for them before the runtime goes away.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    command: String,
    pending: Arc<Mutex<JoinSet<()>>>,
}

impl CommandNotifier {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            pending: Arc::new(Mutex::new(JoinSet::new())),
        }
    }

    /// Number of reload commands spawned and not yet reaped.
    pub fn pending(&self) -> usize {
        self.lock_pending().len()
    }

    /// Wait for every reload command spawned so far.
    pub async fn drain(&self) {
        let mut pending = std::mem::take(&mut *self.lock_pending());
        let count = pending.len();
        while pending.join_next().await.is_some() {}
        if count > 0 {
            debug!(count, "reload commands drained");
        }
    }

    fn lock_pending(&self) -> MutexGuard<'_, JoinSet<()>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EditorNotifier for CommandNotifier {
    fn refresh(&self, path: &Path) -> Result<()> {
        let handle = tokio::runtime::Handle::try_current()
            .context("no Tokio runtime to run the reload command on")?;

        let mut cmd = shell_command(&self.command);
        cmd.env(PATH_ENV, path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let command = self.command.clone();
        let path = path.to_path_buf();
        let task = async move {
            match cmd.status().await {
                Ok(status) if status.success() => {
                    debug!(?path, cmd = %command, "reload command finished");
                }
                Ok(status) => {
                    warn!(?path, cmd = %command, code = ?status.code(), "reload command failed");
                }
                Err(err) => {
                    warn!(?path, cmd = %command, error = %err, "could not spawn reload command");
                }
            }
        };

        let mut pending = self.lock_pending();
        // Reap finished commands so a long watch session does not accumulate them.
        while pending.try_join_next().is_some() {}
        pending.spawn_on(task, &handle);

        Ok(())
    }
}

/// Build a shell command appropriate for the platform.
fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    }
}
