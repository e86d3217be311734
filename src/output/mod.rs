mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PortInventoryError, Result};
use crate::summary::ScanSummary;

/// Trait for rendering a finalized scan summary into a report body.
pub trait ReportFormatter {
    /// Format the summary into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, summary: &ScanSummary) -> Result<String>;
}

/// Write both reports next to `prefix` and return their paths.
///
/// The JSON report is written first, atomically (temp file then rename), so a
/// TXT write failure still leaves a complete machine-readable report behind.
///
/// # Errors
/// Returns [`PortInventoryError::ReportWrite`] if either report file cannot be
/// created.
pub fn write_reports(summary: &ScanSummary, prefix: &str) -> Result<(PathBuf, PathBuf)> {
    let json_path = PathBuf::from(format!("{prefix}.json"));
    let txt_path = PathBuf::from(format!("{prefix}.txt"));

    let json_body = JsonFormatter.format(summary)?;
    write_atomic(&json_path, &json_body)?;

    let txt_body = TextFormatter.format(summary)?;
    fs::write(&txt_path, txt_body).map_err(|source| PortInventoryError::ReportWrite {
        path: txt_path.clone(),
        source,
    })?;

    Ok((json_path, txt_path))
}

fn write_atomic(path: &Path, body: &str) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let write_err = |source| PortInventoryError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&tmp, body).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
