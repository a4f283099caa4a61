//! Cleaning pipeline with explicit stages.
//!
//! 1. **Ingest**: read the source file and unwrap the feature list
//! 2. **Clean**: run every feature through the record pipeline
//! 3. **Output**: write the clean dataset and optional skip report
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use aed_core::{CleanRun, clean_features};
use aed_ingest::read_features;
use aed_model::CleanOptions;
use aed_output::{render_documents, sha256_hex, write_documents, write_skip_report};

/// Output file name used when `--output` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "aed_clean_normalized_stand_dates_with_validation.json";

/// Default output path: [`DEFAULT_OUTPUT_FILE`] in the input's directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_file_name(DEFAULT_OUTPUT_FILE)
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

pub fn ingest(input: &Path) -> Result<Vec<Value>> {
    let features =
        read_features(input).with_context(|| format!("read input {}", input.display()))?;
    info!(input = %input.display(), feature_count = features.len(), "ingest complete");
    Ok(features)
}

// ============================================================================
// Stage 2: Clean
// ============================================================================

pub fn clean(features: &[Value], options: &CleanOptions) -> CleanRun {
    clean_features(features, options)
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Where the output stage writes.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig<'a> {
    pub output: &'a Path,
    pub skip_report: Option<&'a Path>,
    /// Render and hash, but write nothing.
    pub dry_run: bool,
}

/// Result of the output stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputResult {
    /// SHA-256 of the clean dataset bytes (written or not).
    pub sha256: String,
    pub written: bool,
    pub skip_report: Option<PathBuf>,
}

pub fn output(run: &CleanRun, config: &OutputConfig<'_>) -> Result<OutputResult> {
    if config.dry_run {
        let json = render_documents(&run.accepted).context("render clean dataset")?;
        info!(documents = run.accepted_count(), "dry run, nothing written");
        return Ok(OutputResult {
            sha256: sha256_hex(json.as_bytes()),
            written: false,
            skip_report: None,
        });
    }

    let summary = write_documents(config.output, &run.accepted)
        .with_context(|| format!("write output {}", config.output.display()))?;
    if let Some(path) = config.skip_report {
        write_skip_report(path, &run.skipped)
            .with_context(|| format!("write skip report {}", path.display()))?;
    }
    Ok(OutputResult {
        sha256: summary.sha256,
        written: true,
        skip_report: config.skip_report.map(Path::to_path_buf),
    })
}
