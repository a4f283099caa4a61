//! AED data ingestion.
//!
//! Reads the source file once, fully, into memory and unwraps the feature
//! list. Two top-level shapes are accepted:
//!
//! - a GeoJSON `FeatureCollection` object with a `features` array
//! - a bare array of feature objects
//!
//! Features are returned as raw JSON values; deciding whether each one is
//! usable is left to the cleaning pipeline.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use aed_ingest::read_features;
//!
//! let features = read_features(Path::new("aedLocations.json"))?;
//! println!("{} features", features.len());
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use reader::{InputShape, parse_features, read_features, unwrap_features};
