//! AED record transformation.
//!
//! This crate turns a raw feature that already passed the geometry filter
//! into a candidate clean document:
//!
//! - **extract**: read the property fields the output schema needs
//! - **normalization**: dates, access levels, indoor flag, derived name
//! - **assemble**: build the `CleanDocument`
//!
//! Nothing here decides whether a record is kept. All functions are pure.

pub mod assemble;
pub mod extract;
pub mod normalization;

pub use assemble::assemble_document;
pub use extract::{ExtractedProperties, extract_properties};
pub use normalization::{normalize_access, normalize_date};
