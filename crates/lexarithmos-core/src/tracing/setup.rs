//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the Lexarithmos tracing/logging system.
///
/// Reads the `LEXARITHMOS_LOG` environment variable for per-crate log levels.
/// Format: `LEXARITHMOS_LOG=lexarithmos_storage=debug,lexarithmos_analysis=info`
///
/// Falls back to `lexarithmos=info` if `LEXARITHMOS_LOG` is not set or is invalid.
/// Output goes to stderr so command output on stdout stays clean.
///
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
