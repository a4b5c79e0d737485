// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Parses a filter directive, falling back to `info` when it is malformed.
pub fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
        EnvFilter::new("info")
    })
}

/// Installs the global subscriber. `log_level` comes from `Config`, which reads `RUST_LOG`.
pub fn init_logging(log_level: &str, json: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level))
        .with_target(true);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
