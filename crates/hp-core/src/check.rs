//! List validation without producing artifacts.
//!
//! `check` parses the mapping list and reports two classes of problems
//! the generation pipeline would otherwise surface late or not at all:
//! source files that do not exist (generate would skip them) and
//! duplicate derived output names (a later entry would silently
//! overwrite an earlier staged file).

use crate::list;
use hp_common::{EmojiName, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Problem classes reported by `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    /// The entry's source file does not exist in the source directory.
    MissingSource,
    /// The entry derives the same output file name as an earlier entry.
    DuplicateOutput,
}

/// One problem found in the mapping list.
#[derive(Debug, Clone, Serialize)]
pub struct CheckProblem {
    /// Problem class.
    pub kind: ProblemKind,

    /// 1-based line number of the offending entry.
    pub line: usize,

    /// Source file name as written in the list.
    pub file_name: String,

    /// Human-readable detail.
    pub detail: String,
}

impl fmt::Display for CheckProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({})", self.line, self.detail, self.file_name)
    }
}

/// Result of a list check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Entries parsed from the list.
    pub entries: usize,

    /// Problems found, in list order.
    pub problems: Vec<CheckProblem>,
}

impl CheckReport {
    /// Whether the list has no problems.
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Parse the list and verify every entry against the source directory.
///
/// # Errors
///
/// Returns a list error if the mapping list is unreadable or empty;
/// per-entry problems are reported, not returned as errors.
pub fn check(list_path: &Path, source_dir: &Path) -> Result<CheckReport> {
    let entries = list::load_list(list_path)?;
    let mut problems = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for entry in &entries {
        if !source_dir.join(&entry.file_name).is_file() {
            problems.push(CheckProblem {
                kind: ProblemKind::MissingSource,
                line: entry.line,
                file_name: entry.file_name.clone(),
                detail: "source file not found".to_string(),
            });
        }

        let name = EmojiName::derive(&entry.file_name, &entry.alias);
        let output_name = name.output_file_name(&entry.file_name);
        match seen.get(&output_name) {
            Some(first_line) => {
                problems.push(CheckProblem {
                    kind: ProblemKind::DuplicateOutput,
                    line: entry.line,
                    file_name: entry.file_name.clone(),
                    detail: format!(
                        "output name '{output_name}' already produced by line {first_line}"
                    ),
                });
            }
            None => {
                seen.insert(output_name, entry.line);
            }
        }
    }

    Ok(CheckReport {
        entries: entries.len(),
        problems,
    })
}
