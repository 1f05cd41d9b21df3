//! Logging setup for embedders of the kennel ledger.
//!
//! The library itself only emits `tracing` events; binaries and services call
//! one of these functions once at startup to install a subscriber.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Initialize compact logging at INFO.
///
/// `RUST_LOG` overrides the default level.
pub fn init() {
    init_with_level("info")
}

/// Initialize compact logging with a specific default level.
pub fn init_with_level(default_level: &str) {
    install(default_level, LogFormat::Compact)
}

/// Initialize logging from the `logging` configuration section.
pub fn init_from_config(config: &LoggingConfig) {
    install(&config.level, config.format)
}

fn install(default_level: &str, format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
        LogFormat::Json => registry.with(fmt::layer().json().with_current_span(false)).init(),
    }
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
