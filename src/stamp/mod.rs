// src/stamp/mod.rs

//! New-script detection and declaration stamping.
//!
//! A scan hands every watched script to [`NewFileClassifier::process`], which
//! applies, in order:
//! - the plugin-directory exclusion,
//! - the recency window ([`RECENCY_WINDOW_SECS`]),
//! - the novelty rule (first sight, or size change plus a stub-shaped body,
//!   see [`heuristic`]),
//! - and, for new scripts, the declaration prepend (identifier from
//!   [`naming`]).

pub mod classifier;
pub mod heuristic;
pub mod naming;

pub use classifier::{NewFileClassifier, Outcome, RECENCY_WINDOW_SECS};
pub use heuristic::{looks_freshly_created, ContentShape, MAX_STUB_LINES};
pub use naming::{derive_identifier, identifier_for_path};
