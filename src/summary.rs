//! The scan accumulator: one [`ScanSummary`] is built file-by-file during
//! traversal, finalized once, then consumed by the report writers.
//!
//! Classification and content matching live here, not in the walker, so they can
//! be exercised with synthetic file records and no filesystem.

use std::collections::BTreeSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog;

/// A file at or above [`catalog::LARGE_FILE_THRESHOLD`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LargeFile {
    pub path: String,
    pub size_bytes: u64,
}

/// Aggregated inventory for one scanned tree.
///
/// Map fields use insertion-ordered maps so repeat runs over an unchanged tree
/// serialize byte-identically; `external_libs` is a `BTreeSet` and therefore
/// serializes as a sorted sequence.
#[derive(Debug, Serialize)]
pub struct ScanSummary {
    pub root: String,
    pub extension_counts: IndexMap<String, usize>,
    pub solutions: Vec<String>,
    pub project_files: Vec<String>,
    pub source_file_count: usize,
    pub header_file_count: usize,
    pub resource_file_count: usize,
    pub other_file_count: usize,
    pub large_files: Vec<LargeFile>,
    pub indicator_matches: IndexMap<String, Vec<String>>,
    pub indicator_counts: IndexMap<String, usize>,
    pub external_libs: BTreeSet<String>,
}

impl ScanSummary {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.display().to_string(),
            extension_counts: IndexMap::new(),
            solutions: Vec::new(),
            project_files: Vec::new(),
            source_file_count: 0,
            header_file_count: 0,
            resource_file_count: 0,
            other_file_count: 0,
            large_files: Vec::new(),
            indicator_matches: IndexMap::new(),
            indicator_counts: IndexMap::new(),
            external_libs: BTreeSet::new(),
        }
    }

    /// Record one regular file.
    ///
    /// `content` is `Some` only for extensions on the text-scan whitelist; the
    /// caller reads it permissively (unreadable files pass an empty string).
    /// Every call increments exactly one extension bucket and exactly one of the
    /// four category counters. Solution/project tagging is independent of the
    /// category chain: a `.sln` file is tagged a solution and still counted as
    /// "other".
    pub fn record_file(&mut self, rel_path: &str, size: u64, content: Option<&str>) {
        let file_name = Path::new(rel_path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = catalog::extension_of(&file_name);

        *self.extension_counts.entry(ext.clone()).or_insert(0) += 1;

        if catalog::SOLUTION_EXTS.contains(&ext.as_str()) {
            self.solutions.push(rel_path.to_string());
        }
        if catalog::PROJECT_EXTS.contains(&ext.as_str()) {
            self.project_files.push(rel_path.to_string());
        }

        if catalog::SOURCE_EXTS.contains(&ext.as_str()) {
            self.source_file_count += 1;
        } else if catalog::HEADER_EXTS.contains(&ext.as_str()) {
            self.header_file_count += 1;
        } else if catalog::RESOURCE_EXTS.contains(&ext.as_str()) {
            self.resource_file_count += 1;
        } else {
            self.other_file_count += 1;
        }

        if size >= catalog::LARGE_FILE_THRESHOLD {
            self.large_files.push(LargeFile {
                path: rel_path.to_string(),
                size_bytes: size,
            });
        }

        if let Some(text) = content {
            self.scan_text(rel_path, text);
        }
    }

    /// Literal-substring indicator matching plus `.lib`/`.dll` token extraction.
    ///
    /// A file appears at most once per pattern no matter how often the substring
    /// occurs in it.
    fn scan_text(&mut self, rel_path: &str, text: &str) {
        for pat in catalog::WINDOWS_INDICATORS {
            if text.contains(pat) {
                self.indicator_matches
                    .entry((*pat).to_string())
                    .or_default()
                    .push(rel_path.to_string());
            }
        }

        if text.contains(".lib") || text.contains(".dll") {
            for token in text.split_whitespace() {
                let lower = token.to_lowercase();
                if lower.ends_with(".lib") || lower.ends_with(".dll") {
                    let cleaned = token.trim_matches(catalog::LIB_TOKEN_TRIM_CHARS);
                    self.external_libs.insert(cleaned.to_string());
                }
            }
        }
    }

    /// Derive `indicator_counts` from the match lists. Called exactly once, at
    /// end of traversal; the summary is read-only afterwards.
    pub fn finalize(&mut self) {
        self.indicator_counts = self
            .indicator_matches
            .iter()
            .map(|(pat, files)| (pat.clone(), files.len()))
            .collect();
    }

    /// Total regular files recorded (the four category counters are mutually
    /// exclusive, so they sum to the traversal total).
    #[must_use]
    pub const fn total_files(&self) -> usize {
        self.source_file_count
            + self.header_file_count
            + self.resource_file_count
            + self.other_file_count
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
