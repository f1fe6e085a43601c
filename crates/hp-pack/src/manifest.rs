//! Akkoma/Pleroma pack manifest and file mapping.
//!
//! Akkoma imports a pack from two JSON documents: a manifest keyed by
//! pack name (description, file pointer, URLs, zip hash, license) and a
//! flat name→file mapping referenced by the manifest's `files` field.
//! Both serialize with sorted keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pack-level metadata for one pack in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackEntry {
    /// Human-readable pack description.
    pub description: String,

    /// Name of the mapping file holding name→file entries.
    pub files: String,

    /// Project homepage URL.
    pub homepage: String,

    /// Download URL of the zip the hash refers to.
    pub src: String,

    /// SHA-256 hex digest of the zip at `src`.
    pub src_sha256: String,

    /// License of the pack contents.
    pub license: String,
}

/// Manifest document: pack name → pack entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackManifest {
    packs: BTreeMap<String, PackEntry>,
}

impl PackManifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pack entry.
    pub fn insert(&mut self, name: impl Into<String>, entry: PackEntry) {
        self.packs.insert(name.into(), entry);
    }

    /// Look up a pack entry by name.
    pub fn get(&self, name: &str) -> Option<&PackEntry> {
        self.packs.get(name)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Flat name→file mapping consumed via the manifest's `files` pointer.
///
/// Backed by a `BTreeMap` so keys always serialize in sorted order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileMapping {
    entries: BTreeMap<String, String>,
}

impl FileMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a canonical name to its staged file name.
    pub fn insert(&mut self, name: impl Into<String>, file_name: impl Into<String>) {
        self.entries.insert(name.into(), file_name.into());
    }

    /// Look up the staged file name for a canonical name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of mapped names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (name, file name) pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> PackEntry {
        PackEntry {
            description: "Pride hearts encased in hearts.".to_string(),
            files: "celeste_hearts_akkoma.json".to_string(),
            homepage: "https://example.org/".to_string(),
            src: "https://example.org/pack.zip".to_string(),
            src_sha256: "a".repeat(64),
            license: "CC BY-NC-SA 4.0".to_string(),
        }
    }

    #[test]
    fn test_manifest_insert_and_get() {
        let mut manifest = PackManifest::new();
        manifest.insert("celeste_hearts", sample_entry());

        let entry = manifest.get("celeste_hearts").unwrap();
        assert_eq!(entry.files, "celeste_hearts_akkoma.json");
        assert!(manifest.get("missing").is_none());
    }

    #[test]
    fn test_manifest_json_shape() {
        let mut manifest = PackManifest::new();
        manifest.insert("celeste_hearts", sample_entry());

        let json = manifest.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let entry = &value["celeste_hearts"];
        for key in [
            "description",
            "files",
            "homepage",
            "src",
            "src_sha256",
            "license",
        ] {
            assert!(entry.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn test_mapping_keys_sorted() {
        let mut mapping = FileMapping::new();
        mapping.insert("celeste_hearts_z", "celeste_hearts_z.gif");
        mapping.insert("celeste_hearts_a", "celeste_hearts_a.gif");
        mapping.insert("celeste_hearts_m", "celeste_hearts_m.gif");

        let names: Vec<&str> = mapping.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["celeste_hearts_a", "celeste_hearts_m", "celeste_hearts_z"]
        );

        let json = mapping.to_json().unwrap();
        let a = json.find("celeste_hearts_a").unwrap();
        let m = json.find("celeste_hearts_m").unwrap();
        let z = json.find("celeste_hearts_z").unwrap();
        assert!(a < m && m < z);
    }

    #[test]
    fn test_mapping_lookup() {
        let mut mapping = FileMapping::new();
        mapping.insert("celeste_hearts_bi", "celeste_hearts_bi.gif");

        assert_eq!(
            mapping.get("celeste_hearts_bi"),
            Some("celeste_hearts_bi.gif")
        );
        assert_eq!(mapping.len(), 1);
        assert!(!mapping.is_empty());
    }

    #[test]
    fn test_mapping_flat_json() {
        let mut mapping = FileMapping::new();
        mapping.insert("celeste_hearts_bi", "celeste_hearts_bi.gif");

        let value: serde_json::Value =
            serde_json::from_str(&mapping.to_json().unwrap()).unwrap();
        assert_eq!(
            value["celeste_hearts_bi"],
            serde_json::json!("celeste_hearts_bi.gif")
        );
    }
}
