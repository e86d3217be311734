use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortInventoryError {
    #[error("Invalid scan root (not a directory): {0}")]
    InvalidRoot(String),

    #[error("Failed to write report: {path}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PortInventoryError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
