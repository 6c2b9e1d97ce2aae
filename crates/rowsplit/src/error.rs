//! Application-wide error types using thiserror.

use rowsplit_common::RowsplitError;
use std::path::PathBuf;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Record, chart or configuration error.
    #[error(transparent)]
    Rowsplit(#[from] RowsplitError),

    /// Workbook could not be opened or read.
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// CSV file could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The requested worksheet does not exist.
    #[error("No worksheet named '{name}' in {}", .path.display())]
    MissingSheet {
        /// Workbook path
        path: PathBuf,
        /// Requested sheet
        name: String,
    },

    /// The input file type is not supported.
    #[error("Unsupported input file {}: expected .xlsx, .xlsm, .xls, .ods or .csv", .0.display())]
    UnsupportedInput(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
