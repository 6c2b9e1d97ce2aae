//! Configuration loading utilities

use crate::Config;
use rowsplit_common::{Result as RowsplitResult, RowsplitError};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "ROWSPLIT_CONFIG_PATH";

/// Files probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["rowsplit.yaml", "rowsplit.yml", "rowsplit.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// File extension is neither YAML nor TOML
    #[error("Unsupported configuration file '{0}', expected .yaml, .yml or .toml")]
    UnsupportedFormat(PathBuf),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {reason}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Parse failure
        reason: String,
    },
}

impl From<ConfigError> for RowsplitError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("could not load configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration: the given file, else `ROWSPLIT_CONFIG_PATH`, else
    /// the first default file present, else built-in defaults. Environment
    /// overrides are applied and the result validated.
    pub fn load(path: Option<&Path>) -> RowsplitResult<Config> {
        let mut config = match Self::resolve_path(path) {
            Some(path) => {
                info!(path = %path.display(), "loading configuration");
                Self::parse_file(&path)?
            }
            None => {
                debug!("no configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_env_overrides(&mut config, |var| env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file, without environment overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RowsplitResult<Config> {
        let config = Self::parse_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists())
    }

    /// Parses a YAML or TOML file, chosen by extension.
    pub fn parse_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(serde_yaml::from_str(&content)?),
            Some("toml") => Ok(toml::from_str(&content)?),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Apply environment variable overrides to configuration.
    ///
    /// `lookup` resolves a variable name; pass `|v| std::env::var(v).ok()` for
    /// the process environment.
    pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup("ROWSPLIT_FORMAT") {
            config.input.format = parse_var("ROWSPLIT_FORMAT", &format)?;
        }

        if let Some(sheet) = lookup("ROWSPLIT_SHEET") {
            config.input.sheet = Some(sheet);
        }

        if let Some(enabled) = lookup("ROWSPLIT_WEIGHT_ADJUSTED") {
            config.weighting.enabled = parse_var("ROWSPLIT_WEIGHT_ADJUSTED", &enabled)?;
        }

        if let Some(distance) = lookup("ROWSPLIT_DISTANCE") {
            config.chart.distance = parse_var("ROWSPLIT_DISTANCE", &distance)?;
        }

        if let Some(width) = lookup("ROWSPLIT_CHART_WIDTH") {
            config.chart.width = parse_var("ROWSPLIT_CHART_WIDTH", &width)?;
        }

        if let Some(height) = lookup("ROWSPLIT_CHART_HEIGHT") {
            config.chart.height = parse_var("ROWSPLIT_CHART_HEIGHT", &height)?;
        }

        if let Some(show) = lookup("ROWSPLIT_SHOW_SPLITS") {
            config.chart.show_splits = parse_var("ROWSPLIT_SHOW_SPLITS", &show)?;
        }

        if let Some(level) = lookup("ROWSPLIT_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(json) = lookup("ROWSPLIT_LOG_JSON") {
            config.logging.json = parse_var("ROWSPLIT_LOG_JSON", &json)?;
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::EnvParseError {
        var: var.to_string(),
        reason: e.to_string(),
    })
}
