#![allow(dead_code)]

pub use scriptstamp_test_utils::builders::{ext_dialect, ProjectBuilder, TestProject, INSTALL_DIR};
pub use scriptstamp_test_utils::recording::RecordingNotifier;
pub use scriptstamp_test_utils::{init_tracing, with_timeout};
