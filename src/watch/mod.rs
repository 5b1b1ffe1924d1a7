// src/watch/mod.rs

//! File watching and change detection.
//!
//! This module is responsible for:
//! - Deciding which files are watched scripts (`patterns`).
//! - Walking the project tree (`walk`).
//! - Remembering the last observed time and size of every script
//!   (`registry`).
//! - Wiring up a cross-platform filesystem watcher (`notify`) that turns
//!   raw events into payload-free change signals (`watcher`).
//!
//! It does **not** decide whether a script is new; that lives in
//! [`crate::stamp`].

pub mod path_utils;
pub mod patterns;
pub mod registry;
pub mod walk;
pub mod watcher;

pub use patterns::WatchFilter;
pub use registry::{FileRegistry, TrackedFileInfo};
pub use walk::collect_watched_files;
pub use watcher::{spawn_watcher, WatcherHandle};
