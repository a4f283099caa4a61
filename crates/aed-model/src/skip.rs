//! Reasons a source record was left out of the clean output.
//!
//! Each variant carries only the data needed to explain it. Skips are never
//! fatal; the batch continues with the next record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad grouping of skip reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkipCategory {
    /// Missing or malformed geometry, coordinates, or required fields.
    Structural,
    /// Valid coordinates outside the configured region.
    Region,
    /// A property had a JSON type the cleaner cannot use.
    Unexpected,
}

impl SkipCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkipCategory::Structural => "Structural",
            SkipCategory::Region => "Region",
            SkipCategory::Unexpected => "Unexpected",
        }
    }
}

/// Why a record was skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    // Feature shape
    /// Collection element is not a JSON object
    NotAFeature { found: &'static str },

    // Geometry checks
    /// No geometry, or geometry is null
    MissingGeometry,
    /// Geometry is not a Point (`found` holds the type tag, if any)
    NotPoint { found: Option<String> },
    /// Point has no coordinates
    MissingCoordinates,
    /// Coordinates are not a two-element array
    MalformedCoordinates { len: Option<usize> },
    /// Coordinate pair holds a non-number
    NonNumericCoordinates,

    // Range checks
    /// Coordinates outside the configured region
    OutsideRegion { lon: f64, lat: f64 },
    /// Coordinates outside valid longitude/latitude ranges
    CoordinatesOutOfRange { lon: f64, lat: f64 },

    // Document checks
    /// Access is not a canonical value
    InvalidAccess { value: String },
    /// Property has an unusable JSON type
    UnexpectedFieldType {
        field: String,
        found: &'static str,
    },
}

impl SkipReason {
    /// Stable code used in reports.
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::NotAFeature { .. } => "AED0001",
            SkipReason::MissingGeometry => "AED0002",
            SkipReason::NotPoint { .. } => "AED0003",
            SkipReason::MissingCoordinates => "AED0004",
            SkipReason::MalformedCoordinates { .. } => "AED0005",
            SkipReason::NonNumericCoordinates => "AED0006",
            SkipReason::OutsideRegion { .. } => "AED0007",
            SkipReason::CoordinatesOutOfRange { .. } => "AED0008",
            SkipReason::InvalidAccess { .. } => "AED0009",
            SkipReason::UnexpectedFieldType { .. } => "AED0010",
        }
    }

    pub fn category(&self) -> SkipCategory {
        match self {
            SkipReason::OutsideRegion { .. } => SkipCategory::Region,
            SkipReason::UnexpectedFieldType { .. } => SkipCategory::Unexpected,
            _ => SkipCategory::Structural,
        }
    }

    /// Short label for summary tables.
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::NotAFeature { .. } => "Not a feature",
            SkipReason::MissingGeometry => "Missing geometry",
            SkipReason::NotPoint { .. } => "Not a Point",
            SkipReason::MissingCoordinates => "Missing coordinates",
            SkipReason::MalformedCoordinates { .. } => "Malformed coordinates",
            SkipReason::NonNumericCoordinates => "Non-numeric coordinates",
            SkipReason::OutsideRegion { .. } => "Outside region",
            SkipReason::CoordinatesOutOfRange { .. } => "Coordinates out of range",
            SkipReason::InvalidAccess { .. } => "Invalid access",
            SkipReason::UnexpectedFieldType { .. } => "Unexpected field type",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAFeature { found } => {
                write!(f, "feature is a {found}, expected an object")
            }
            SkipReason::MissingGeometry => f.write_str("feature has no geometry"),
            SkipReason::NotPoint { found: Some(kind) } => {
                write!(f, "geometry type is {kind}, expected Point")
            }
            SkipReason::NotPoint { found: None } => f.write_str("geometry has no Point type"),
            SkipReason::MissingCoordinates => f.write_str("geometry has no coordinates"),
            SkipReason::MalformedCoordinates { len: Some(len) } => {
                write!(f, "coordinates have {len} elements, expected 2")
            }
            SkipReason::MalformedCoordinates { len: None } => {
                f.write_str("coordinates are not an array")
            }
            SkipReason::NonNumericCoordinates => f.write_str("coordinates are not numbers"),
            SkipReason::OutsideRegion { lon, lat } => {
                write!(f, "coordinates [{lon}, {lat}] are outside the region")
            }
            SkipReason::CoordinatesOutOfRange { lon, lat } => {
                write!(f, "coordinates [{lon}, {lat}] are not a valid position")
            }
            SkipReason::InvalidAccess { value } => {
                write!(f, "access '{value}' is not public, private, or unknown")
            }
            SkipReason::UnexpectedFieldType { field, found } => {
                write!(f, "property {field} is a {found}, expected a string")
            }
        }
    }
}

/// A skipped record and its position in the source collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: SkipReason,
}
