//! Data model for the AED location cleaner.
//!
//! - **record**: loosely-typed input features as read from the source file
//! - **geo**: coordinates and regional bounding boxes
//! - **access**: canonical access levels
//! - **document**: the clean output schema
//! - **skip**: typed reasons a record was left out of the output
//! - **options**: run configuration

pub mod access;
pub mod document;
pub mod error;
pub mod geo;
pub mod options;
pub mod record;
pub mod skip;

pub use access::AccessLevel;
pub use document::{CleanDocument, GeometryType, LAST_CHECKED_FORMAT, LastChecked, Location};
pub use error::{ModelError, Result};
pub use geo::{BoundingBox, Coordinate};
pub use options::CleanOptions;
pub use record::RawRecord;
pub use skip::{SkipCategory, SkipReason, SkippedRecord};
