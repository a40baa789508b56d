#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line:
//! 1. One file record per bumped manifest, in summary order
//! 2. One summary record

use crate::bump::BumpSummary;
use crate::engine::executor::BumpedFileRecord;
use crate::types::ReleaseType;
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the bump summary as JSONL
    pub fn format(&self, summary: &BumpSummary) -> String {
        let mut output = String::new();

        for file in &summary.bumped_files {
            let record = FileRecord {
                record_type: "file",
                file,
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        let record = SummaryRecord {
            record_type: "summary",
            bump_type: summary.release_type,
            bumped_files: summary.bumped_files.len(),
        };
        if let Ok(json) = serde_json::to_string(&record) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Record for a single bumped manifest
#[derive(Debug, Serialize)]
struct FileRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    #[serde(flatten)]
    file: &'a BumpedFileRecord,
}

/// Record closing the output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    bump_type: ReleaseType,
    bumped_files: usize,
}
