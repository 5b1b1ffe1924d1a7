// src/engine/runtime.rs

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::scanner::{ScanReport, Scanner};
use crate::engine::RuntimeEvent;

/// The main event loop.
///
/// Each `FilesystemChanged` signal produces exactly one scan. Signals are
/// neither coalesced nor debounced; because the loop owns the scanner, scans
/// never overlap.
pub struct Runtime {
    scanner: Scanner,
    rx: mpsc::Receiver<RuntimeEvent>,
}

impl Runtime {
    pub fn new(scanner: Scanner, rx: mpsc::Receiver<RuntimeEvent>) -> Self {
        Self { scanner, rx }
    }

    /// Run until shutdown is requested or every sender is dropped.
    ///
    /// Returns the scanner so callers can inspect the final registry.
    pub async fn run(mut self) -> Result<Scanner> {
        info!("runtime started");

        while let Some(event) = self.rx.recv().await {
            match event {
                RuntimeEvent::FilesystemChanged => {
                    self.handle_change().await;
                }
                RuntimeEvent::ShutdownRequested => {
                    info!("shutdown requested");
                    break;
                }
            }
        }

        debug!("runtime loop finished");
        Ok(self.scanner)
    }

    /// Give the filesystem one scheduling tick to settle, then scan.
    async fn handle_change(&mut self) -> ScanReport {
        tokio::task::yield_now().await;
        self.scanner.scan()
    }
}
