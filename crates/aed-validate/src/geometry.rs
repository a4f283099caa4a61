//! Geometry and region screen.

use serde_json::Value;

use aed_model::{BoundingBox, Coordinate, RawRecord, SkipReason};

/// Check that a raw feature is a Point inside `region`.
///
/// Returns the position on success. Checks run cheapest first and stop at
/// the first failure.
pub fn check_geometry(record: &RawRecord, region: &BoundingBox) -> Result<Coordinate, SkipReason> {
    let geometry = match &record.geometry {
        None | Some(Value::Null) => return Err(SkipReason::MissingGeometry),
        Some(geometry) => geometry,
    };

    let Some(geometry) = geometry.as_object() else {
        return Err(SkipReason::NotPoint { found: None });
    };
    match geometry.get("type") {
        Some(Value::String(kind)) if kind == "Point" => {}
        Some(Value::String(kind)) => {
            return Err(SkipReason::NotPoint {
                found: Some(kind.clone()),
            });
        }
        _ => return Err(SkipReason::NotPoint { found: None }),
    }

    let coordinates = match geometry.get("coordinates") {
        None | Some(Value::Null) => return Err(SkipReason::MissingCoordinates),
        Some(Value::Array(values)) => values,
        Some(_) => return Err(SkipReason::MalformedCoordinates { len: None }),
    };
    let [lon, lat] = coordinates.as_slice() else {
        return Err(SkipReason::MalformedCoordinates {
            len: Some(coordinates.len()),
        });
    };
    let (Some(lon), Some(lat)) = (lon.as_f64(), lat.as_f64()) else {
        return Err(SkipReason::NonNumericCoordinates);
    };

    let coordinate = Coordinate::new(lon, lat);
    if !region.contains(coordinate) {
        return Err(SkipReason::OutsideRegion { lon, lat });
    }
    Ok(coordinate)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn check(geometry: Value) -> Result<Coordinate, SkipReason> {
        let record = RawRecord {
            geometry: Some(geometry),
            properties: None,
        };
        check_geometry(&record, &BoundingBox::IRELAND)
    }

    #[test]
    fn dublin_is_kept() {
        assert_eq!(
            check(json!({"type": "Point", "coordinates": [-6.26, 53.35]})),
            Ok(Coordinate::new(-6.26, 53.35))
        );
    }

    #[test]
    fn integer_coordinates_are_numbers() {
        assert_eq!(
            check(json!({"type": "Point", "coordinates": [-6, 53]})),
            Ok(Coordinate::new(-6.0, 53.0))
        );
    }

    #[test]
    fn new_york_is_outside_region() {
        assert_eq!(
            check(json!({"type": "Point", "coordinates": [-74.0, 40.7]})),
            Err(SkipReason::OutsideRegion {
                lon: -74.0,
                lat: 40.7
            })
        );
    }

    #[test]
    fn swapped_order_is_outside_region() {
        assert!(matches!(
            check(json!({"type": "Point", "coordinates": [53.35, -6.26]})),
            Err(SkipReason::OutsideRegion { .. })
        ));
    }

    #[test]
    fn missing_geometry() {
        let record = RawRecord::default();
        assert_eq!(
            check_geometry(&record, &BoundingBox::IRELAND),
            Err(SkipReason::MissingGeometry)
        );
        assert_eq!(check(Value::Null), Err(SkipReason::MissingGeometry));
    }

    #[test]
    fn non_point_geometry() {
        assert_eq!(
            check(json!({"type": "LineString", "coordinates": [[-6.2, 53.3], [-6.3, 53.4]]})),
            Err(SkipReason::NotPoint {
                found: Some("LineString".to_string())
            })
        );
        assert_eq!(
            check(json!({"type": "point", "coordinates": [-6.26, 53.35]})),
            Err(SkipReason::NotPoint {
                found: Some("point".to_string())
            })
        );
        assert_eq!(
            check(json!({"coordinates": [-6.26, 53.35]})),
            Err(SkipReason::NotPoint { found: None })
        );
        assert_eq!(check(json!("Point")), Err(SkipReason::NotPoint { found: None }));
    }

    #[test]
    fn bad_coordinates() {
        assert_eq!(
            check(json!({"type": "Point"})),
            Err(SkipReason::MissingCoordinates)
        );
        assert_eq!(
            check(json!({"type": "Point", "coordinates": null})),
            Err(SkipReason::MissingCoordinates)
        );
        assert_eq!(
            check(json!({"type": "Point", "coordinates": [-6.26, 53.35, 10.0]})),
            Err(SkipReason::MalformedCoordinates { len: Some(3) })
        );
        assert_eq!(
            check(json!({"type": "Point", "coordinates": "-6.26,53.35"})),
            Err(SkipReason::MalformedCoordinates { len: None })
        );
        assert_eq!(
            check(json!({"type": "Point", "coordinates": ["-6.26", "53.35"]})),
            Err(SkipReason::NonNumericCoordinates)
        );
    }
}
