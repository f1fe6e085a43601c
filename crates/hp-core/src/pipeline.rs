//! Pack generation pipeline.
//!
//! One linear pass: load the list, clear the output folder, stage
//! renamed copies, write the Mastodon tar, generate the Misskey
//! `meta.json`, write the Misskey zip, hash it, and write the Akkoma
//! manifest and mapping. Per-entry copy failures skip the entry;
//! everything else aborts the run.
//!
//! The tar is written before `meta.json` is generated, so it contains
//! only images; the zip, written after, includes the sidecar.

use crate::aliases::aliases_for;
use crate::list;
use crate::staging::StagingArea;
use hp_common::{EmojiName, Error, Result, CATEGORY};
use hp_pack::{
    archive, EmojiInfo, EmojiMeta, FileMapping, MetaFile, PackEntry, PackManifest, META_FILE_NAME,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Pack name keying the Akkoma manifest.
pub const PACK_NAME: &str = "celeste_hearts";

/// Default Misskey host string.
pub const DEFAULT_HOST: &str = "cataclysm.systems";

/// Default mapping list file name.
pub const DEFAULT_LIST_FILE: &str = "fedi_hearts_list.txt";

/// Default output folder name, resolved next to the source directory.
pub const DEFAULT_OUTPUT_DIR: &str = "Fediverse Packs";

/// Mastodon artifact file name.
pub const TAR_FILE_NAME: &str = "celeste_hearts_mastodon_emojis.tar.gz";

/// Misskey artifact file name.
pub const ZIP_FILE_NAME: &str = "celeste_hearts_misskey_emojis.zip";

/// Akkoma mapping artifact file name.
pub const MAPPING_FILE_NAME: &str = "celeste_hearts_akkoma.json";

/// Akkoma manifest artifact file name.
pub const MANIFEST_FILE_NAME: &str = "celeste_hearts_akkoma_manifest.json";

const PACK_DESCRIPTION: &str = "Pride hearts encased in hearts, inspired by the Celeste game.";
const PACK_HOMEPAGE: &str = "https://github.com/mecha-cat/celeste-hearts/";
const PACK_SRC_URL: &str =
    "https://github.com/mecha-cat/celeste-hearts/raw/main/Fediverse%20Packs/celeste_hearts_misskey_emojis.zip";
const PACK_LICENSE: &str = "CC BY-NC-SA 4.0";

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Mapping list file.
    pub list_path: PathBuf,

    /// Directory the list's file names are resolved against.
    pub source_dir: PathBuf,

    /// Output folder for the four artifacts.
    pub output_dir: PathBuf,

    /// Host string recorded in the Misskey meta.
    pub host: String,

    /// Keep the staging directory instead of removing it.
    pub keep_staging: bool,
}

/// Outcome of a generation run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Entries packed into the artifacts.
    pub packed: usize,

    /// Entries skipped because their source could not be read.
    pub skipped: usize,

    /// SHA-256 hex digest of the Misskey zip.
    pub zip_sha256: String,

    /// Paths of the written artifacts.
    pub tar_path: PathBuf,
    pub zip_path: PathBuf,
    pub mapping_path: PathBuf,
    pub manifest_path: PathBuf,

    /// Kept staging directory, present only with `keep_staging`.
    pub staging_path: Option<PathBuf>,
}

/// Run the full pack generation pipeline.
///
/// # Errors
///
/// Returns a list error if the mapping list is unreadable or empty, an
/// output error if the output folder cannot be prepared, and archive or
/// manifest errors if any artifact cannot be produced (including the
/// case where every entry was skipped and there is nothing to archive).
pub fn generate(opts: &GenerateOptions) -> Result<RunSummary> {
    let entries = list::load_list(&opts.list_path)?;
    info!(entries = entries.len(), list = %opts.list_path.display(), "Mapping list loaded");

    prepare_output_dir(&opts.output_dir)?;

    let staging = StagingArea::new()?;
    let mut meta = MetaFile::new(&opts.host);
    let mut mapping = FileMapping::new();
    let mut skipped = 0usize;

    for entry in &entries {
        debug!(file = %entry.file_name, "Processing entry");
        let name = EmojiName::derive(&entry.file_name, &entry.alias);
        let output_name = name.output_file_name(&entry.file_name);
        let source = opts.source_dir.join(&entry.file_name);

        if let Err(err) = staging.stage(&source, &output_name) {
            error!(
                file = %entry.file_name,
                %err,
                "Cannot access file, skipping entry"
            );
            skipped += 1;
            continue;
        }

        meta.add_emoji(EmojiMeta::new(
            &output_name,
            EmojiInfo {
                name: name.canonical(),
                category: CATEGORY.to_string(),
                aliases: aliases_for(&name),
            },
        ));
        mapping.insert(name.canonical(), &output_name);
    }
    let packed = entries.len() - skipped;

    info!("Packing for Mastodon admin console");
    let tar_path = opts.output_dir.join(TAR_FILE_NAME);
    archive::write_tar_gz(staging.path(), &tar_path)
        .map_err(|err| Error::Archive(err.to_string()))?;

    info!("Generating Misskey meta.json");
    meta.sort_emojis();
    let meta_json = meta
        .to_json()
        .map_err(|err| Error::Manifest(err.to_string()))?;
    fs::write(staging.path().join(META_FILE_NAME), meta_json)?;

    info!("Packing for Misskey");
    let zip_path = opts.output_dir.join(ZIP_FILE_NAME);
    archive::write_zip(staging.path(), &zip_path)
        .map_err(|err| Error::Archive(err.to_string()))?;

    let zip_sha256 =
        archive::sha256_hex(&zip_path).map_err(|err| Error::Archive(err.to_string()))?;

    info!("Generating Akkoma/Pleroma manifest and mapping");
    let mut manifest = PackManifest::new();
    manifest.insert(
        PACK_NAME,
        PackEntry {
            description: PACK_DESCRIPTION.to_string(),
            files: MAPPING_FILE_NAME.to_string(),
            homepage: PACK_HOMEPAGE.to_string(),
            src: PACK_SRC_URL.to_string(),
            src_sha256: zip_sha256.clone(),
            license: PACK_LICENSE.to_string(),
        },
    );

    let mapping_path = opts.output_dir.join(MAPPING_FILE_NAME);
    fs::write(
        &mapping_path,
        mapping
            .to_json()
            .map_err(|err| Error::Manifest(err.to_string()))?,
    )?;

    let manifest_path = opts.output_dir.join(MANIFEST_FILE_NAME);
    fs::write(
        &manifest_path,
        manifest
            .to_json()
            .map_err(|err| Error::Manifest(err.to_string()))?,
    )?;

    let staging_path = if opts.keep_staging {
        let kept = staging.keep();
        info!(path = %kept.display(), "Staging directory kept");
        Some(kept)
    } else {
        staging.close()?;
        None
    };

    info!(packed, skipped, "Pack generation complete");
    Ok(RunSummary {
        packed,
        skipped,
        zip_sha256,
        tar_path,
        zip_path,
        mapping_path,
        manifest_path,
        staging_path,
    })
}

/// Create the output folder if needed and delete every plain file
/// directly inside it. Subdirectories are left alone.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    clear_output_files(dir).map_err(|source| Error::OutputFolder {
        path: dir.to_path_buf(),
        source,
    })
}

fn clear_output_files(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            debug!(path = %entry.path().display(), "Removing old artifact");
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}
