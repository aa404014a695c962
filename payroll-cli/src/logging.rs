use std::io;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set. Keeps the printed report clean.
pub const DEFAULT_FILTER: &str = "warn";

fn make_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `default_directive` otherwise.
/// * Writes to stderr without timestamps or target names so stdout carries
///   only the report.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(default_directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(make_filter(default_directive))
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
