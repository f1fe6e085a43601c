//! Staging directory management.
//!
//! Source images are copied into a fresh temporary directory under
//! their normalized names before archiving. The directory is removed
//! when the area is dropped, so a failed run does not leak staging
//! directories.

use hp_common::{Error, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// Prefix of the staging directory name under the system temp dir.
const STAGING_PREFIX: &str = "celeste-hearts-";

/// Temporary staging directory for renamed copies of source images.
#[derive(Debug)]
pub struct StagingArea {
    dir: TempDir,
}

impl StagingArea {
    /// Create a fresh staging directory.
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir()
            .map_err(Error::Staging)?;
        debug!(path = %dir.path().display(), "Staging directory created");
        Ok(StagingArea { dir })
    }

    /// Path of the staging directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Copy a source file into the staging directory under `file_name`.
    ///
    /// Failures here are per-entry and recoverable; the caller decides
    /// whether to skip or abort.
    pub fn stage(&self, source: &Path, file_name: &str) -> std::io::Result<()> {
        std::fs::copy(source, self.dir.path().join(file_name))?;
        Ok(())
    }

    /// Remove the staging directory, surfacing removal errors.
    pub fn close(self) -> std::io::Result<()> {
        self.dir.close()
    }

    /// Persist the staging directory on disk and return its path.
    pub fn keep(self) -> PathBuf {
        self.dir.keep()
    }
}
