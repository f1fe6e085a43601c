//! Mapping list loading and parsing.
//!
//! The list is a hand-curated UTF-8 text file with one entry per line:
//!
//! ```text
//! # comment
//! Hearts 01.gif | Gay Pride
//! ch_mlm.gif
//! ```
//!
//! Lines are split on the first unescaped pipe (`\|` does not split)
//! into a file name and an optional alias, both whitespace-trimmed.
//! Blank lines and `#`-prefixed lines are skipped. A line without a
//! pipe has an empty alias.

use hp_common::{Error, Result};
use std::fs;
use std::path::Path;

/// One parsed entry of the mapping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Source file name, relative to the source directory.
    pub file_name: String,

    /// Curated alias, empty when the line has none.
    pub alias: String,

    /// 1-based line number in the list file.
    pub line: usize,
}

/// Read and parse a mapping list file.
///
/// # Errors
///
/// Returns [`Error::ListRead`] if the file cannot be read and
/// [`Error::EmptyList`] if it parses to zero entries.
pub fn load_list(path: &Path) -> Result<Vec<ListEntry>> {
    let text = fs::read_to_string(path).map_err(|source| Error::ListRead {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_list(&text);
    if entries.is_empty() {
        return Err(Error::EmptyList {
            path: path.to_path_buf(),
        });
    }
    Ok(entries)
}

/// Parse mapping list text into entries.
pub fn parse_list(text: &str) -> Vec<ListEntry> {
    text.lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }

            let mut fields = split_unescaped_pipes(line);
            let file_name = fields.next().unwrap_or_default().trim().to_string();
            let alias = fields.next().unwrap_or_default().trim().to_string();
            if file_name.is_empty() {
                return None;
            }

            Some(ListEntry {
                file_name,
                alias,
                line: index + 1,
            })
        })
        .collect()
}

/// Split on pipes not preceded by a backslash. The escaping backslash
/// itself is preserved in the field; fields beyond the second are
/// ignored by the caller.
fn split_unescaped_pipes(line: &str) -> impl Iterator<Item = &str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut prev_backslash = false;
    for (i, c) in line.char_indices() {
        if c == '|' && !prev_backslash {
            fields.push(&line[start..i]);
            start = i + 1;
        }
        prev_backslash = c == '\\';
    }
    fields.push(&line[start..]);
    fields.into_iter()
}
