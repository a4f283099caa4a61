use std::path::PathBuf;

use aed_core::CleanRun;
use aed_model::BoundingBox;

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub region: BoundingBox,
    pub run: CleanRun,
    /// SHA-256 of the clean dataset bytes.
    pub sha256: String,
    /// False for `--dry-run`.
    pub written: bool,
    pub skip_report: Option<PathBuf>,
}
