//! Pack format writers for the hearts pack generator.
//!
//! This crate produces the three fediverse distribution formats from a
//! staged directory of renamed emoji images:
//!
//! - Mastodon: a gzip-compressed tar of the staged images
//! - Misskey: a zip of the staged images plus a `meta.json` sidecar
//! - Akkoma/Pleroma: a JSON pack manifest and a name→file mapping
//!
//! # Determinism
//!
//! Archive entries are added in sorted name order and the mapping and
//! manifest serialize with sorted keys, so repeated runs over unchanged
//! inputs differ only in the export timestamp (and, through it, the zip
//! hash).
//!
//! # Example
//!
//! ```no_run
//! use hp_pack::{archive, MetaFile};
//! use std::path::Path;
//!
//! let staging = Path::new("/tmp/staging");
//! archive::write_tar_gz(staging, Path::new("out/emojis.tar.gz")).unwrap();
//!
//! let mut meta = MetaFile::new("cataclysm.systems");
//! meta.sort_emojis();
//! std::fs::write(staging.join("meta.json"), meta.to_json().unwrap()).unwrap();
//! archive::write_zip(staging, Path::new("out/emojis.zip")).unwrap();
//! ```

pub mod archive;
pub mod error;
pub mod manifest;
pub mod meta;

pub use error::{PackError, Result};
pub use manifest::{FileMapping, PackEntry, PackManifest};
pub use meta::{EmojiInfo, EmojiMeta, MetaFile, META_FILE_NAME, META_VERSION};
