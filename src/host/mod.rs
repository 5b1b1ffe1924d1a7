// src/host/mod.rs

//! Collaborators owned by the host editor.
//!
//! The core never talks to an editor directly: it asks an
//! [`EditorNotifier`] to refresh a buffer after rewriting a script, and it
//! exposes [`PluginMetadata`] for whatever plugin registry the host keeps.

pub mod metadata;
pub mod notifier;

pub use metadata::PluginMetadata;
pub use notifier::{CommandNotifier, EditorNotifier, LogNotifier, PATH_ENV};
