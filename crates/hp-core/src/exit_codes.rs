//! Exit codes for the hp-core CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing.
//!
//! Exit code ranges:
//! - 0-9: Success/operational outcomes
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal errors (should be reported)

use hp_common::{Error, ErrorCategory};

/// Exit codes for hp-core operations.
///
/// These codes are a stable contract for automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success: every entry packed, or check found nothing to report
    Clean = 0,

    /// Run completed but entries were skipped, or check found problems
    Partial = 1,

    /// List file unreadable or empty
    ListError = 10,

    /// Archive, manifest, staging, or output folder failure
    InternalError = 20,
}

impl ExitCode {
    /// The process exit code value.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err.category() {
            ErrorCategory::List => ExitCode::ListError,
            ErrorCategory::Staging
            | ErrorCategory::Output
            | ErrorCategory::Pack
            | ErrorCategory::Io => ExitCode::InternalError,
        }
    }
}
