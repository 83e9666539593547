//! Shared fixtures for critpath's integration tests.

pub mod builders;

use std::sync::Once;

use critpath::logging::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Route critpath's tracing output into the test harness.
///
/// Reads the same `CRITPATH_LOG` variable as the binary, but as a full
/// filter directive (e.g. `critpath::cpm=trace`). Defaults to `warn`, so
/// passing tests stay quiet unless run with `--nocapture`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

        // Keep going if a test already set a global subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
