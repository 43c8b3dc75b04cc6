//! Shared configuration and logging setup for the gcal crates.

pub mod config;
pub mod error;

pub use config::{
    CalendarConfig, Config, ConfigValidationError, HttpConfig, ValidationResult, DEFAULT_BASE_URL,
};
pub use error::ConfigError;

use anyhow::Result;

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`. Calling this more than once is a no-op.
pub fn init() -> Result<()> {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("gcal logging initialized");
    }
    Ok(())
}
