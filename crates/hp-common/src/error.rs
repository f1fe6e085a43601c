//! Error types for the hearts pack generator.
//!
//! This module provides structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//!
//! Per-entry file access failures are not represented here; those are
//! recovered inline (skip and log) and never abort a run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pack generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Mapping list file errors (unreadable, empty).
    List,
    /// Staging directory errors.
    Staging,
    /// Output folder preparation errors.
    Output,
    /// Archive and manifest production errors.
    Pack,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::List => write!(f, "list"),
            ErrorCategory::Staging => write!(f, "staging"),
            ErrorCategory::Output => write!(f, "output"),
            ErrorCategory::Pack => write!(f, "pack"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for the pack generator.
#[derive(Error, Debug)]
pub enum Error {
    // List errors (10-19)
    #[error("cannot read list file '{path}': {source}")]
    ListRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("list file '{path}' contains no entries")]
    EmptyList { path: PathBuf },

    // Staging errors (20-29)
    #[error("cannot create staging directory: {0}")]
    Staging(std::io::Error),

    // Output errors (30-39)
    #[error("cannot prepare output folder '{path}': {source}")]
    OutputFolder {
        path: PathBuf,
        source: std::io::Error,
    },

    // Pack errors (40-49)
    #[error("archive write failed: {0}")]
    Archive(String),

    #[error("manifest write failed: {0}")]
    Manifest(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the stable error code for this error type.
    ///
    /// Error codes are grouped by category:
    /// - 10-19: List errors
    /// - 20-29: Staging errors
    /// - 30-39: Output errors
    /// - 40-49: Pack errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::ListRead { .. } => 10,
            Error::EmptyList { .. } => 11,
            Error::Staging(_) => 20,
            Error::OutputFolder { .. } => 30,
            Error::Archive(_) => 40,
            Error::Manifest(_) => 41,
            Error::Io(_) => 60,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::ListRead { .. } | Error::EmptyList { .. } => ErrorCategory::List,
            Error::Staging(_) => ErrorCategory::Staging,
            Error::OutputFolder { .. } => ErrorCategory::Output,
            Error::Archive(_) | Error::Manifest(_) => ErrorCategory::Pack,
            Error::Io(_) => ErrorCategory::Io,
        }
    }

    /// Returns whether the error points at user input rather than an
    /// internal failure.
    ///
    /// User errors (unreadable or empty list) map to the 10-19 exit
    /// range; everything else is reported as an internal failure.
    pub fn is_user_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::List)
    }
}
