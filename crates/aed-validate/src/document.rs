//! Final document gate.

use aed_model::{AccessLevel, CleanDocument, GeometryType, SkipReason};

/// Run every document check and collect all failures.
///
/// The access check cannot fail for documents built by the assembler, since
/// `AccessLevel` only holds canonical values; it is kept as the last gate.
pub fn check_document(document: &CleanDocument) -> Vec<SkipReason> {
    let mut reasons = Vec::new();

    // 1. Location must be a Point
    if document.location.geometry_type != GeometryType::Point {
        reasons.push(SkipReason::NotPoint {
            found: Some(document.location.geometry_type.as_str().to_string()),
        });
    }

    // 2. Coordinates must be a valid position
    let coordinate = document.location.coordinate();
    if !coordinate.is_valid() {
        reasons.push(SkipReason::CoordinatesOutOfRange {
            lon: coordinate.lon,
            lat: coordinate.lat,
        });
    }

    // 3. Access must be canonical
    if AccessLevel::parse(document.access.as_str()) != Some(document.access) {
        reasons.push(SkipReason::InvalidAccess {
            value: document.access.to_string(),
        });
    }

    // Indoor is a `bool` field; no runtime check needed.

    reasons
}

/// Accept or reject a document, reporting the first failure.
pub fn validate_document(document: &CleanDocument) -> Result<(), SkipReason> {
    match check_document(document).into_iter().next() {
        Some(reason) => Err(reason),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use aed_model::{Coordinate, Location};

    use super::*;

    fn document(lon: f64, lat: f64) -> CleanDocument {
        CleanDocument {
            location: Location::point(Coordinate::new(lon, lat)),
            address: None,
            operator: None,
            name: "AED".to_string(),
            indoor: false,
            access: AccessLevel::Unknown,
            description: None,
            opening_hours: None,
            last_checked_at: None,
        }
    }

    #[test]
    fn valid_document_passes() {
        assert_eq!(validate_document(&document(-6.26, 53.35)), Ok(()));
        assert!(check_document(&document(180.0, -90.0)).is_empty());
    }

    #[test]
    fn out_of_range_coordinates_fail() {
        assert_eq!(
            validate_document(&document(-190.0, 53.0)),
            Err(SkipReason::CoordinatesOutOfRange {
                lon: -190.0,
                lat: 53.0
            })
        );
        assert_eq!(check_document(&document(0.0, 91.0)).len(), 1);
    }

    #[test]
    fn nan_coordinates_fail() {
        assert!(matches!(
            validate_document(&document(f64::NAN, 53.0)),
            Err(SkipReason::CoordinatesOutOfRange { .. })
        ));
    }

    #[test]
    fn every_access_level_is_canonical() {
        for access in AccessLevel::ALL {
            let mut candidate = document(-6.0, 53.0);
            candidate.access = access;
            assert_eq!(validate_document(&candidate), Ok(()));
        }
    }
}
