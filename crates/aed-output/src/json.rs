//! JSON rendering for clean documents and skip reports.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use aed_model::{CleanDocument, SkippedRecord};

use crate::atomic::write_atomic;
use crate::error::{OutputError, Result};
use crate::hash::sha256_hex;

/// What was written by [`write_documents`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSummary {
    pub path: PathBuf,
    pub document_count: usize,
    /// SHA-256 of the bytes written, lowercase hex.
    pub sha256: String,
}

/// One row of the skip report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkipReportEntry {
    pub index: usize,
    pub code: &'static str,
    pub message: String,
}

impl From<&SkippedRecord> for SkipReportEntry {
    fn from(skipped: &SkippedRecord) -> Self {
        Self {
            index: skipped.index,
            code: skipped.reason.code(),
            message: skipped.reason.to_string(),
        }
    }
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|source| OutputError::Serialization { source })?;
    json.push('\n');
    Ok(json)
}

/// Render documents as a pretty JSON array (two-space indent, trailing newline).
pub fn render_documents(documents: &[CleanDocument]) -> Result<String> {
    to_pretty_json(documents)
}

/// Write the clean dataset atomically.
pub fn write_documents(path: &Path, documents: &[CleanDocument]) -> Result<OutputSummary> {
    let json = render_documents(documents)?;
    write_atomic(path, json.as_bytes())?;

    let summary = OutputSummary {
        path: path.to_path_buf(),
        document_count: documents.len(),
        sha256: sha256_hex(json.as_bytes()),
    };
    info!(
        output = %path.display(),
        documents = summary.document_count,
        sha256 = %summary.sha256,
        "wrote clean dataset"
    );
    Ok(summary)
}

pub fn render_skip_report(skipped: &[SkippedRecord]) -> Result<String> {
    let entries: Vec<SkipReportEntry> = skipped.iter().map(SkipReportEntry::from).collect();
    to_pretty_json(&entries)
}

/// Write the skip report atomically.
pub fn write_skip_report(path: &Path, skipped: &[SkippedRecord]) -> Result<()> {
    let json = render_skip_report(skipped)?;
    write_atomic(path, json.as_bytes())?;
    info!(report = %path.display(), entries = skipped.len(), "wrote skip report");
    Ok(())
}
