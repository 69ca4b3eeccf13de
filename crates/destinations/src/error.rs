//! Error types for the destinations library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pipeline operations.
///
/// Bad cell values never surface here: field parsers substitute their
/// documented defaults. Only whole-run failures are errors.
#[derive(Debug, Error)]
pub enum DestinationError {
    /// The configured input file does not exist.
    #[error("Input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Empty file or no header to read.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error (bad column map, unknown schema version, ...).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two rows produced the same id while duplicates are rejected.
    #[error("Duplicate id '{id}' (rows {first_row} and {second_row})")]
    DuplicateId {
        id: String,
        first_row: usize,
        second_row: usize,
    },
}

impl DestinationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DestinationError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for destinations operations.
pub type Result<T> = std::result::Result<T, DestinationError>;
