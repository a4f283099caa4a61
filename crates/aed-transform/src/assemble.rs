//! Clean document assembly.

use aed_model::{CleanDocument, Coordinate, Location};

use crate::extract::ExtractedProperties;
use crate::normalization::{derive_name, normalize_access, normalize_date};

/// Build a candidate document from a verified position and extracted tags.
///
/// Pure construction: the result still has to pass document validation.
pub fn assemble_document(coordinate: Coordinate, properties: &ExtractedProperties) -> CleanDocument {
    CleanDocument {
        location: Location::point(coordinate),
        address: properties.address.clone(),
        operator: properties.operator.clone(),
        name: derive_name(properties.operator.as_deref()),
        indoor: properties.indoor,
        access: normalize_access(properties.access.as_deref()),
        description: properties.description.clone(),
        opening_hours: properties.opening_hours.clone(),
        last_checked_at: normalize_date(properties.last_checked.as_deref()),
    }
}
