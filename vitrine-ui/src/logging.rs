//! `tracing` subscriber setup for hosts and demos.

use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use crate::config::VitrineConfig;

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over [`VitrineConfig::log_filter`]; an invalid
/// configured filter falls back to `error`. Calling this more than once is
/// harmless: later calls leave the first subscriber in place.
pub fn init_tracing(config: &VitrineConfig) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match EnvFilter::try_new(&config.log_filter) {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("error"),
        },
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE);

    let _ = if config.pretty_logs {
        builder.pretty().try_init()
    } else {
        builder.compact().try_init()
    };
}
