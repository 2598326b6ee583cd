//! Tracing subscriber setup for the server binary.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log level {0}: {1}")]
    InvalidLogLevel(String, String),

    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),
}

/// Filter from an explicit directive, else `RUST_LOG`, else `info`.
pub fn build_filter(level: Option<&str>) -> Result<EnvFilter, LoggingError> {
    match level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| LoggingError::InvalidLogLevel(level.to_string(), e.to_string())),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
    }
}

/// Install the global subscriber. Call once, before serving.
pub fn init_logging(level: Option<&str>) -> Result<(), LoggingError> {
    let filter = build_filter(level)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| LoggingError::InitializationError(e.to_string()))
}
