//! Error types for AED data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort ingestion. Any of these stops the run.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON.
    #[error("failed to parse JSON{}: {source}", display_path(.path.as_ref()))]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level JSON is neither a feature collection nor an array.
    #[error("unexpected input shape: {reason}")]
    UnexpectedShape { reason: String },
}

fn display_path(path: Option<&PathBuf>) -> String {
    path.map(|path| format!(" in {}", path.display()))
        .unwrap_or_default()
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
