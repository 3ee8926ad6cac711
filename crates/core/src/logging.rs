//! Logging infrastructure for the cascade splitter.
//!
//! Initializes the tracing subscriber for structured logging. All logs go
//! to stderr so stdout stays free for whatever the embedding program prints.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AppError, AppResult};

/// Initialize the tracing subscriber with stderr output.
///
/// # Arguments
/// * `log_level` - Optional filter override (e.g., "debug", "cascade_splitter=trace")
/// * `no_color` - Disable colored output
///
/// # Example
/// ```no_run
/// use cascade_core::logging::init_logging;
///
/// init_logging(None, false).expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level: Option<&str>, no_color: bool) -> AppResult<()> {
    let default_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter_str = log_level.unwrap_or(&default_level);

    let env_filter = EnvFilter::try_new(filter_str)
        .map_err(|e| AppError::Config(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(!no_color && supports_color());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to init logging: {}", e)))?;

    Ok(())
}

/// Initialize logging from a loaded [`AppConfig`](crate::config::AppConfig).
pub fn init_from_config(config: &crate::config::AppConfig) -> AppResult<()> {
    init_logging(config.effective_log_level(), config.no_color)
}

fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_rejected() {
        let result = init_logging(Some("cascade=notalevel"), true);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_init_logging() {
        // Only the first call per process can install the global subscriber
        let config = crate::config::AppConfig {
            verbose: true,
            no_color: true,
            ..Default::default()
        };
        let _ = init_from_config(&config);
        assert!(init_from_config(&config).is_err());
    }
}
