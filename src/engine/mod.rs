// src/engine/mod.rs

//! Orchestration engine for scriptstamp.
//!
//! This module ties together:
//! - the [`Scanner`], which owns the registry and runs one synchronous pass
//!   over the watched tree,
//! - the [`Runtime`] event loop that reacts to:
//!   - filesystem change signals
//!   - shutdown signals

pub mod runtime;
pub mod scanner;

pub use runtime::Runtime;
pub use scanner::{ScanReport, ScanSettings, Scanner};

/// Events flowing into the runtime from the watcher and Ctrl-C handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// Something under the project root changed. No path is attached; the
    /// whole tree is rescanned.
    FilesystemChanged,
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}
