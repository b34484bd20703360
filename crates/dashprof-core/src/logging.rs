//! Logging init: stderr only, so the report on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Initialize tracing to stderr with an env-filter.
///
/// Defaults to `warn,dashprof=info`; override with `RUST_LOG`.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,dashprof=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
