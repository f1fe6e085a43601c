//! Misskey `meta.json` types and serialization.
//!
//! Misskey's emoji import reads a zip whose root contains the image
//! files and a `meta.json` describing them. Field names are camelCase
//! on the wire; the emoji array is sorted by file name before writing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Misskey meta format version understood by current servers.
pub const META_VERSION: u32 = 2;

/// Metadata sidecar file name inside the zip.
pub const META_FILE_NAME: &str = "meta.json";

/// Top-level `meta.json` document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaFile {
    /// Meta format version.
    pub meta_version: u32,

    /// Host the pack is exported for.
    pub host: String,

    /// Export timestamp.
    pub exported_at: DateTime<Utc>,

    /// Emoji entries, sorted by file name.
    pub emojis: Vec<EmojiMeta>,
}

impl MetaFile {
    /// Create an empty meta document stamped with the current time.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            meta_version: META_VERSION,
            host: host.into(),
            exported_at: Utc::now(),
            emojis: Vec::new(),
        }
    }

    /// Add an emoji entry.
    pub fn add_emoji(&mut self, emoji: EmojiMeta) {
        self.emojis.push(emoji);
    }

    /// Number of emoji entries.
    pub fn emoji_count(&self) -> usize {
        self.emojis.len()
    }

    /// Sort entries by file name for deterministic output.
    pub fn sort_emojis(&mut self) {
        self.emojis.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One emoji entry in the meta document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiMeta {
    /// Always true for locally packed files.
    pub downloaded: bool,

    /// Staged file name inside the zip.
    pub file_name: String,

    /// Emoji identity and aliases.
    pub emoji: EmojiInfo,
}

impl EmojiMeta {
    /// Create an entry for a staged file.
    pub fn new(file_name: impl Into<String>, emoji: EmojiInfo) -> Self {
        Self {
            downloaded: true,
            file_name: file_name.into(),
            emoji,
        }
    }
}

/// Emoji identity: canonical name, category, and aliases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiInfo {
    /// Canonical emoji name.
    pub name: String,

    /// Pack category.
    pub category: String,

    /// Alias names, short form first.
    pub aliases: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(file_name: &str) -> EmojiMeta {
        EmojiMeta::new(
            file_name,
            EmojiInfo {
                name: "celeste_hearts_bi".to_string(),
                category: "celeste_hearts".to_string(),
                aliases: vec!["ch_bi".to_string()],
            },
        )
    }

    #[test]
    fn test_meta_new() {
        let meta = MetaFile::new("cataclysm.systems");

        assert_eq!(meta.meta_version, META_VERSION);
        assert_eq!(meta.host, "cataclysm.systems");
        assert_eq!(meta.emoji_count(), 0);
    }

    #[test]
    fn test_entry_is_downloaded() {
        assert!(entry("celeste_hearts_bi.gif").downloaded);
    }

    #[test]
    fn test_sort_emojis() {
        let mut meta = MetaFile::new("cataclysm.systems");
        meta.add_emoji(entry("celeste_hearts_z.gif"));
        meta.add_emoji(entry("celeste_hearts_a.gif"));
        meta.add_emoji(entry("celeste_hearts_m.gif"));

        meta.sort_emojis();

        assert_eq!(meta.emojis[0].file_name, "celeste_hearts_a.gif");
        assert_eq!(meta.emojis[1].file_name, "celeste_hearts_m.gif");
        assert_eq!(meta.emojis[2].file_name, "celeste_hearts_z.gif");
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let mut meta = MetaFile::new("cataclysm.systems");
        meta.add_emoji(entry("celeste_hearts_bi.gif"));

        let json = meta.to_json().unwrap();

        assert!(json.contains("\"metaVersion\": 2"));
        assert!(json.contains("\"exportedAt\""));
        assert!(json.contains("\"fileName\": \"celeste_hearts_bi.gif\""));
        assert!(json.contains("\"aliases\""));
        assert!(!json.contains("meta_version"));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut meta = MetaFile::new("cataclysm.systems");
        meta.add_emoji(entry("celeste_hearts_bi.gif"));

        let parsed = MetaFile::from_json(&meta.to_json().unwrap()).unwrap();

        assert_eq!(parsed.host, meta.host);
        assert_eq!(parsed.emoji_count(), 1);
        assert_eq!(parsed.emojis[0].emoji.name, "celeste_hearts_bi");
    }
}
