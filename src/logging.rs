//! Logging configuration.
//!
//! Initializes a `tracing` subscriber writing to stderr, filtered by
//! `RUST_LOG` with an `info` default. Call once from the embedding
//! application; library code only emits events.

use tracing_subscriber::EnvFilter;

/// Initializes logging to stderr.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
