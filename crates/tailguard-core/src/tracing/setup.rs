//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::env_keys;

static INIT: Once = Once::new();

/// Initialize the tailguard tracing/logging system.
///
/// Reads the `TAILGUARD_LOG` environment variable for per-crate log levels.
/// Format: `TAILGUARD_LOG=tailguard_gate=debug,tailguard_core=info`
///
/// Falls back to `warn` if `TAILGUARD_LOG` is not set or is invalid.
/// Logs are written to stderr; stdout is reserved for the decision trace.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(env_keys::LOG).unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
