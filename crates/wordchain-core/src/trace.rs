//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the wordchain tracing/logging system.
///
/// Reads the `WORDCHAIN_LOG` environment variable for per-subsystem log
/// levels, e.g. `WORDCHAIN_LOG=wordchain_search=debug`. Falls back to
/// `wordchain=warn` if unset or invalid. Logs go to stderr; stdout is
/// reserved for query results.
///
/// Idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("WORDCHAIN_LOG")
            .unwrap_or_else(|_| EnvFilter::new("wordchain=warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
