//! Error types for the Glimpse library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Glimpse operations.
///
/// The profiling engine itself never fails; every variant except
/// [`GlimpseError::MalformedInput`] comes from decoding or I/O around it.
#[derive(Debug, Error)]
pub enum GlimpseError {
    /// Rows do not share the column set of the first row.
    #[error("Malformed input at row {row}: {message}")]
    MalformedInput { row: usize, message: String },

    /// Error reading or accessing a file.
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

    /// Empty file or no columns to read.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Input exceeds the configured size ceiling.
    #[error("Input too large: {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: u64, limit: u64 },

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Invalid delimiter specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Glimpse operations.
pub type Result<T> = std::result::Result<T, GlimpseError>;
