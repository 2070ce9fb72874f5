//! Logging setup for the server binary.

use tracing_subscriber::{
    EnvFilter,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};
use vvgo_error::{ConfigError, VvgoResult};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `log_level` when set. Call once per process.
pub fn init_logging(log_level: &str, json_logs: bool) -> VvgoResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|e| ConfigError::new(format!("Invalid log level {}: {}", log_level, e)))?;

    let fmt_layer = if json_logs {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install subscriber: {}", e)))?;

    Ok(())
}
