//! AED cleaning pipeline.
//!
//! Each feature goes through the same ordered steps:
//!
//! 1. **Feature shape**: the element must be a JSON object
//! 2. **Geometry screen**: Point geometry inside the configured region
//! 3. **Extraction**: read the source tags
//! 4. **Assembly**: normalize and build the clean document
//! 5. **Document gate**: final structural validation
//!
//! The first failing step decides the record's [`aed_model::SkipReason`].
//! A run returns every accepted document and every skip; no state outlives
//! the call.
//!
//! # Example
//!
//! ```ignore
//! use aed_core::clean_features;
//! use aed_model::CleanOptions;
//!
//! let run = clean_features(&features, &CleanOptions::default());
//! println!("Cleaned records: {}", run.accepted_count());
//! println!("Skipped records: {}", run.skipped_count());
//! ```

pub mod pipeline;

pub use pipeline::{CleanRun, RecordOutcome, SkipCount, clean_features, process_record};
