//! AED record validation.
//!
//! Two gates, run at different points of the pipeline:
//!
//! 1. **geometry**: structural and regional screen on the raw feature,
//!    before any normalization. Yields the verified position.
//! 2. **document**: final check on the assembled document. Re-checks the
//!    structural invariants independently of the first gate.
//!
//! Both report failures as [`aed_model::SkipReason`].

pub mod document;
pub mod geometry;

pub use document::{check_document, validate_document};
pub use geometry::check_geometry;
