//! Error types and utilities for rowsplit

use thiserror::Error;

/// Result type alias for rowsplit operations
pub type Result<T> = std::result::Result<T, RowsplitError>;

/// Main error type for rowsplit operations
#[derive(Error, Debug)]
pub enum RowsplitError {
    /// A row is missing a required field or carries a value that cannot be parsed.
    /// Aborts the whole record build.
    #[error("Malformed record '{key}': {reason}")]
    MalformedRecord {
        /// Identifying key of the offending row (its name, or `row N`)
        key: String,
        /// What was wrong with the row
        reason: String,
    },

    /// Nothing to compute chart parameters from
    #[error("Empty selection: {reason}")]
    EmptySelection {
        /// Why the selection is unusable
        reason: String,
    },

    /// A selected athlete has no record
    #[error("Unknown athlete: {0}")]
    UnknownAthlete(String),

    /// A caller-supplied parameter is out of range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chart rendering errors
    #[error("Graph error: {message}")]
    Graph {
        /// Error message
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RowsplitError {
    /// Create a malformed record error for the row identified by `key`
    pub fn malformed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create an empty selection error
    pub fn empty_selection(reason: impl Into<String>) -> Self {
        Self::EmptySelection {
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Whether this error was caused by bad input data rather than the environment
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. } | Self::EmptySelection { .. } | Self::UnknownAthlete(_)
        )
    }
}

impl From<serde_json::Error> for RowsplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
