use std::cmp::Reverse;
use std::fmt::Write;

use crate::catalog::LARGE_FILE_THRESHOLD;
use crate::error::Result;
use crate::summary::ScanSummary;

use super::ReportFormatter;

/// At most this many entries per path-list section.
const LIST_CAP: usize = 50;
/// At most this many entries in the external-lib sample.
const LIB_SAMPLE_CAP: usize = 200;

/// Human-readable report with fixed section order: extension counts, solution
/// and project-file lists, category totals, large files, indicator counts, and
/// an external-lib sample.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, summary: &ScanSummary) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(out, "Inventory report for: {}\n", summary.root);

        out.push_str("Summary counts (by extension):\n");
        for (ext, count) in sorted_descending(&summary.extension_counts) {
            let label = if ext.is_empty() { "[noext]" } else { ext.as_str() };
            let _ = writeln!(out, "  {label}: {count}");
        }

        let _ = writeln!(out, "\nSolutions: {}", summary.solutions.len());
        for path in summary.solutions.iter().take(LIST_CAP) {
            let _ = writeln!(out, "  {path}");
        }

        let _ = writeln!(out, "\nProject files: {}", summary.project_files.len());
        for path in summary.project_files.iter().take(LIST_CAP) {
            let _ = writeln!(out, "  {path}");
        }

        let _ = writeln!(
            out,
            "\nSource files: {}, Header files: {}, Resource files: {}",
            summary.source_file_count, summary.header_file_count, summary.resource_file_count
        );

        let _ = writeln!(
            out,
            "\nLarge files (>{}MB): {}",
            LARGE_FILE_THRESHOLD / 1024 / 1024,
            summary.large_files.len()
        );
        for large in summary.large_files.iter().take(LIST_CAP) {
            let _ = writeln!(out, "  {} ({} MB)", large.path, large.size_bytes / 1024 / 1024);
        }

        out.push_str("\n\nWindows-specific indicator counts:\n");
        for (pattern, count) in sorted_descending(&summary.indicator_counts) {
            let _ = writeln!(out, "  {pattern}: {count}");
        }

        out.push_str("\nExternal libs/dlls referenced (sample):\n");
        for lib in summary.external_libs.iter().take(LIB_SAMPLE_CAP) {
            let _ = writeln!(out, "  {lib}");
        }

        Ok(out)
    }
}

/// Sort map entries descending by count. The sort is stable, so ties keep the
/// map's first-seen order and repeat runs render identically.
fn sorted_descending(counts: &indexmap::IndexMap<String, usize>) -> Vec<(&String, usize)> {
    let mut entries: Vec<_> = counts.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by_key(|&(_, count)| Reverse(count));
    entries
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
