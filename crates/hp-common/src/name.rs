//! Canonical emoji naming.
//!
//! Every emoji in the pack is identified by a canonical name of the form
//! `celeste_hearts_<slug>`. The slug comes either from a curated alias or,
//! when no alias is given, from the source file name. Normalization
//! replaces only the first space and the first hyphen with underscores;
//! this single-occurrence substitution is a documented behavior of the
//! pack format and is preserved as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Category assigned to every emoji in the pack.
pub const CATEGORY: &str = "celeste_hearts";

/// Prefix of every canonical emoji name.
pub const NAME_PREFIX: &str = "celeste_hearts_";

/// Prefix of the short alias form.
pub const SHORT_PREFIX: &str = "ch_";

/// Canonical emoji name, stored as the un-prefixed slug.
///
/// Example: slug `gay_pride` renders as `celeste_hearts_gay_pride`
/// (canonical) and `ch_gay_pride` (short alias).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiName(String);

impl EmojiName {
    /// Derive the emoji name for a list entry.
    ///
    /// A non-empty alias wins; otherwise the slug is derived from the
    /// source file name.
    pub fn derive(file_name: &str, alias: &str) -> Self {
        let alias_slug = normalize(alias);
        if !alias_slug.is_empty() {
            return EmojiName(alias_slug);
        }
        EmojiName(slug_from_file_name(file_name))
    }

    /// The un-prefixed slug.
    pub fn slug(&self) -> &str {
        &self.0
    }

    /// The canonical name: `celeste_hearts_<slug>`.
    pub fn canonical(&self) -> String {
        format!("{NAME_PREFIX}{}", self.0)
    }

    /// The short alias form: `ch_<slug>`.
    pub fn short(&self) -> String {
        format!("{SHORT_PREFIX}{}", self.0)
    }

    /// The staged file name: canonical name plus the source file's
    /// extension, preserved verbatim (including case).
    pub fn output_file_name(&self, source_file_name: &str) -> String {
        let (_, ext) = split_extension(base_name(source_file_name));
        format!("{}{ext}", self.canonical())
    }
}

impl fmt::Display for EmojiName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

/// Lower-case and replace the first space and first hyphen with
/// underscores. Later occurrences are left alone.
fn normalize(s: &str) -> String {
    s.to_lowercase().replacen(' ', "_", 1).replacen('-', "_", 1)
}

/// Derive a slug from a source file name: base name without extension,
/// lower-cased, with the known prefixes and any trailing parenthesized
/// suffix (e.g. " (not made by me)") stripped before normalization.
fn slug_from_file_name(file_name: &str) -> String {
    let (stem, _) = split_extension(base_name(file_name));
    let lowered = stem.to_lowercase();
    let stripped = lowered.strip_prefix(NAME_PREFIX).unwrap_or(&lowered);
    let stripped = stripped.strip_prefix(SHORT_PREFIX).unwrap_or(stripped);
    normalize(strip_paren_suffix(stripped))
}

/// The final path component of a file name.
fn base_name(file_name: &str) -> &str {
    Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name)
}

/// Split a base name into (stem, extension-with-dot). A leading dot is
/// part of the stem, not an extension.
fn split_extension(base: &str) -> (&str, &str) {
    match base.rfind('.') {
        Some(i) if i > 0 => (&base[..i], &base[i..]),
        _ => (base, ""),
    }
}

/// Strip a trailing parenthesized suffix: an optional single space
/// followed by `(` ... `)` at the end of the string. The leftmost `(`
/// wins, so `"bi (a) (b)"` strips to `"bi"`.
fn strip_paren_suffix(s: &str) -> &str {
    if !s.ends_with(')') {
        return s;
    }
    match s.find('(') {
        Some(i) => {
            let head = &s[..i];
            head.strip_suffix(' ').unwrap_or(head)
        }
        None => s,
    }
}
