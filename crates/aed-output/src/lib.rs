//! Output generation for the clean AED dataset.
//!
//! - **json**: pretty-printed document array and skip report
//! - **atomic**: temp file + rename writes, so a failed run never truncates
//!   a previous good output
//! - **hash**: SHA-256 checksums for comparing runs

mod atomic;
mod error;
mod hash;
mod json;

pub use atomic::write_atomic;
pub use error::{OutputError, Result};
pub use hash::sha256_hex;
pub use json::{
    OutputSummary, SkipReportEntry, render_documents, render_skip_report, write_documents,
    write_skip_report,
};
