use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::catalog;
use crate::error::{PortInventoryError, Result};
use crate::summary::ScanSummary;

/// Single-pass recursive traversal feeding a [`ScanSummary`].
///
/// Per-entry failures (permission errors, broken symlinks, unreadable content)
/// are skipped or degraded to defaults; only an invalid root is fatal.
pub struct InventoryScanner;

impl InventoryScanner {
    /// Walk `root` and build the inventory summary.
    ///
    /// # Errors
    /// Returns [`PortInventoryError::InvalidRoot`] if `root` is not an existing
    /// directory.
    pub fn scan(root: &Path) -> Result<ScanSummary> {
        if !root.is_dir() {
            return Err(PortInventoryError::InvalidRoot(root.display().to_string()));
        }

        let mut summary = ScanSummary::new(root);

        // Pruning by entry name covers every relative-path segment below the
        // root, so a *file* named like a skip directory is excluded too.
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !catalog::is_skipped_name(e.file_name()));

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let rel = entry.path().strip_prefix(root).unwrap_or_else(|_| entry.path());
            let rel_path = rel.to_string_lossy().into_owned();

            // Stat failures degrade to size 0 rather than aborting the scan.
            let size = entry.metadata().map_or(0, |m| m.len());

            let file_name = entry.file_name().to_string_lossy();
            let ext = catalog::extension_of(&file_name);
            let content = if catalog::scans_content(&ext) {
                Some(read_text_lossy(entry.path()))
            } else {
                None
            };

            summary.record_file(&rel_path, size, content.as_deref());
        }

        summary.finalize();
        Ok(summary)
    }
}

/// Read a file as text, replacing undecodable bytes; unreadable files yield an
/// empty string.
fn read_text_lossy(path: &Path) -> String {
    fs::read(path).map_or_else(
        |_| String::new(),
        |bytes| String::from_utf8_lossy(&bytes).into_owned(),
    )
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
