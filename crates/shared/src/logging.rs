//! Logging bootstrap
//!
//! Logs go to stderr so rendered reports on stdout stay clean.
//! `RUST_LOG` wins over the configured level.

use tracing_subscriber::EnvFilter;

use crate::PinnwandError;

/// Install the global tracing subscriber
pub fn init_logging(default_level: &str) -> crate::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| {
            PinnwandError::Config(format!("invalid log level '{}': {}", default_level, e))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| PinnwandError::Config(format!("failed to install logger: {}", e)))
}
