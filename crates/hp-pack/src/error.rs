//! Error types for pack production.

use thiserror::Error;

/// Errors that can occur while producing pack artifacts.
#[derive(Error, Debug)]
pub enum PackError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Staging directory holds nothing to archive
    #[error("pack has no content to write")]
    EmptyPack,
}

/// Result type alias for pack operations.
pub type Result<T> = std::result::Result<T, PackError>;
