//! Shared helpers for scriptstamp's integration tests.

pub mod builders;
pub mod recording;

use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

pub use builders::{ext_dialect, ProjectBuilder, TestProject};
pub use recording::RecordingNotifier;

/// Upper bound for any async test step; a runtime that never drains its
/// channel fails the test instead of hanging it.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// Logs go through `with_test_writer()`, so they only show up for failing
/// tests (or with `-- --nocapture`). Levels come from `RUST_LOG`, default
/// `info`; `RUST_LOG=scriptstamp=debug` shows every classification.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `f`, panicking after [`TEST_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(TEST_TIMEOUT, f)
        .await
        .unwrap_or_else(|_| panic!("test step did not finish within {TEST_TIMEOUT:?}"))
}
