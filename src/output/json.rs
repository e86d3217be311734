use crate::error::Result;
use crate::summary::ScanSummary;

use super::ReportFormatter;

/// Machine-readable report: the summary serialized as pretty-printed JSON
/// (2-space indent). Field order follows the accumulator's declaration order;
/// map fields keep first-seen key order, `external_libs` serializes sorted.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, summary: &ScanSummary) -> Result<String> {
        Ok(serde_json::to_string_pretty(summary)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
