//! The clean AED document written to the output file.
//!
//! Field order on the structs is the field order in the output JSON.

use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::access::AccessLevel;
use crate::geo::Coordinate;

/// Output date layout, e.g. `31/Jan/2025`.
pub const LAST_CHECKED_FORMAT: &str = "%d/%b/%Y";

/// GeoJSON geometry type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GeometryType {
    Point,
}

impl GeometryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
        }
    }
}

/// GeoJSON Point geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    #[serde(rename = "type")]
    pub geometry_type: GeometryType,
    pub coordinates: [f64; 2],
}

impl Location {
    pub fn point(coordinate: Coordinate) -> Self {
        Self {
            geometry_type: GeometryType::Point,
            coordinates: coordinate.to_position(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        let [lon, lat] = self.coordinates;
        Coordinate::new(lon, lat)
    }
}

/// When the device was last inspected.
///
/// Source dates come in many layouts. Recognized ones are normalized; the
/// rest are kept as text so no information is thrown away. Both variants
/// serialize as a plain string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastChecked {
    /// Parsed date, rendered as `DD/Mon/YYYY`.
    Normalized(NaiveDate),
    /// Unrecognized layout (preserve cleaned original).
    Unparsed(String),
}

impl LastChecked {
    pub fn is_normalized(&self) -> bool {
        matches!(self, LastChecked::Normalized(_))
    }
}

impl fmt::Display for LastChecked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastChecked::Normalized(date) => write!(f, "{}", date.format(LAST_CHECKED_FORMAT)),
            LastChecked::Unparsed(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for LastChecked {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One cleaned AED record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanDocument {
    pub location: Location,
    pub address: Option<String>,
    pub operator: Option<String>,
    pub name: String,
    pub indoor: bool,
    pub access: AccessLevel,
    pub description: Option<String>,
    pub opening_hours: Option<String>,
    pub last_checked_at: Option<LastChecked>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_checked_renders_both_variants() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(LastChecked::Normalized(date).to_string(), "05/Jan/2025");
        assert_eq!(
            LastChecked::Unparsed("spring 2024".to_string()).to_string(),
            "spring 2024"
        );
    }

    #[test]
    fn document_serializes_in_schema_order() {
        let document = CleanDocument {
            location: Location::point(Coordinate::new(-6.26, 53.35)),
            address: None,
            operator: Some("HSE".to_string()),
            name: "HSE AED".to_string(),
            indoor: true,
            access: AccessLevel::Public,
            description: None,
            opening_hours: Some("24/7".to_string()),
            last_checked_at: Some(LastChecked::Normalized(
                NaiveDate::from_ymd_opt(2023, 12, 14).unwrap(),
            )),
        };
        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(
            json,
            r#"{"location":{"type":"Point","coordinates":[-6.26,53.35]},"address":null,"operator":"HSE","name":"HSE AED","indoor":true,"access":"public","description":null,"openingHours":"24/7","lastCheckedAt":"14/Dec/2023"}"#
        );
    }
}
