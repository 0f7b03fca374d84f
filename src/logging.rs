//! Tracing setup
//!
//! Logs go to stderr so command output on stdout stays clean. The filter is
//! read from `ALLOWANCE_LOG` (e.g. `ALLOWANCE_LOG=debug`) and defaults to
//! warnings only.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the tracing filter directives
pub const LOG_ENV_VAR: &str = "ALLOWANCE_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber; later calls are no-ops
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
