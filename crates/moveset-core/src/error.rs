//! Error types for moveset-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in moveset-core
///
/// Names that fail to resolve are not errors; they are reported through
/// [`crate::ParseResult::unresolved`].
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A table row is too short for the fields being read
    #[error("row {line} in '{path}' has {fields} field(s), expected at least {expected}")]
    MalformedSourceRow {
        path: PathBuf,
        line: usize,
        fields: usize,
        expected: usize,
    },

    /// An override entry did not split into exactly `name` and `id`
    #[error("invalid override entry '{entry}', expected name:id")]
    MalformedOverride { entry: String },

    /// A numeric id column held something else
    #[error("row {line} in '{path}' has non-numeric id '{value}'")]
    InvalidId {
        path: PathBuf,
        line: usize,
        value: String,
    },

    /// A data file could not be found under any data directory
    #[error("data file '{name}' not found in any data directory")]
    DataFileNotFound { name: String },

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
