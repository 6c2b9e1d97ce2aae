//! Structured logging infrastructure for rowsplit

use crate::error::{Result, RowsplitError};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "rowsplit_records=trace")
    pub level: String,
    /// Whether to emit JSON lines
    pub json_format: bool,
    /// Whether to enable pretty formatting with colors
    pub pretty_format: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: false,
            file_path: None,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Builds the level filter. `RUST_LOG` wins over the configured level.
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Logs go to stderr unless a file path is configured, so stdout stays free
/// for command output.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let file = match &config.file_path {
        Some(path) => Some(Mutex::new(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?,
        )),
        None => None,
    };

    let outcome = if config.json_format {
        let layer = fmt::layer().json().with_target(config.include_targets);
        match file {
            Some(file) => registry.with(layer.with_writer(file)).try_init(),
            None => registry.with(layer.with_writer(std::io::stderr)).try_init(),
        }
    } else if config.pretty_format {
        let layer = fmt::layer().pretty().with_target(config.include_targets);
        match file {
            Some(file) => registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init(),
            None => registry.with(layer.with_writer(std::io::stderr)).try_init(),
        }
    } else {
        let layer = fmt::layer().compact().with_target(config.include_targets);
        match file {
            Some(file) => registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init(),
            None => registry.with(layer.with_writer(std::io::stderr)).try_init(),
        }
    };

    outcome.map_err(|e| RowsplitError::config_with_source("failed to install logger", e))
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<()> {
    init_logging(&LoggingConfig::default())
}
