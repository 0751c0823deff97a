//! Error types for notebook emission

use thiserror::Error;

/// Error type for notebook generation operations
#[derive(Error, Debug)]
pub enum NotebookError {
    /// I/O error when writing the notebook file
    #[error("Failed to write notebook file: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Failed to serialize notebook JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for notebook operations
pub type Result<T> = std::result::Result<T, NotebookError>;
