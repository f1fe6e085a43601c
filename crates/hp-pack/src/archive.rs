//! Native archive writers over a staging directory.
//!
//! Both writers collect the staging directory's regular files, sort
//! them by name, and add them at the archive root. Errors are surfaced
//! to the caller; there is no partial-success mode for archives.

use crate::{PackError, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Create a gzip-compressed tar archive of the staging directory's
/// files, written to `output_path`. Returns the number of entries.
///
/// # Errors
///
/// Returns [`PackError::EmptyPack`] if the staging directory holds no
/// regular files, or [`PackError::Io`] on read/write failures.
pub fn write_tar_gz(staging_dir: &Path, output_path: &Path) -> Result<usize> {
    let entries = sorted_files(staging_dir)?;
    if entries.is_empty() {
        return Err(PackError::EmptyPack);
    }

    let output = File::create(output_path)?;
    let encoder = GzEncoder::new(output, Compression::default());
    let mut archive = tar::Builder::new(encoder);

    for (path, name) in &entries {
        debug!(entry = %name, "Adding tar entry");
        archive.append_path_with_name(path, name)?;
    }

    let encoder = archive.into_inner()?;
    encoder.finish()?;

    info!(
        path = %output_path.display(),
        entries = entries.len(),
        "Tar archive written"
    );
    Ok(entries.len())
}

/// Create a zip archive of the staging directory's files (flattened,
/// deflate-compressed), written to `output_path`. Returns the number
/// of entries.
///
/// # Errors
///
/// Returns [`PackError::EmptyPack`] if the staging directory holds no
/// regular files, or [`PackError::Io`] / [`PackError::Zip`] on failures.
pub fn write_zip(staging_dir: &Path, output_path: &Path) -> Result<usize> {
    let entries = sorted_files(staging_dir)?;
    if entries.is_empty() {
        return Err(PackError::EmptyPack);
    }

    let output = File::create(output_path)?;
    let mut zip = ZipWriter::new(output);

    let options: FileOptions<'_, ()> = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for (path, name) in &entries {
        debug!(entry = %name, "Adding zip entry");
        zip.start_file(name.as_str(), options)?;
        let mut source = File::open(path)?;
        std::io::copy(&mut source, &mut zip)?;
    }

    zip.finish()?;

    info!(
        path = %output_path.display(),
        entries = entries.len(),
        "Zip archive written"
    );
    Ok(entries.len())
}

/// Compute the SHA-256 hex digest of the exact bytes of a file.
///
/// Reads in chunks so large archives do not need to fit in memory.
pub fn sha256_hex(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Regular files directly inside `dir` as (path, file name) pairs,
/// sorted by file name. Subdirectories are ignored.
fn sorted_files(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            entries.push((
                entry.path(),
                entry.file_name().to_string_lossy().into_owned(),
            ));
        }
    }
    entries.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(entries)
}
