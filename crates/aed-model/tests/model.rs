//! Tests for aed-model types.

use aed_model::{AccessLevel, BoundingBox, CleanOptions, Coordinate};
use proptest::prelude::*;

#[test]
fn default_options_use_ireland() {
    assert_eq!(CleanOptions::default().region, BoundingBox::IRELAND);
    let custom = BoundingBox::new(-10.0, 50.0, 2.0, 60.0).unwrap();
    assert_eq!(CleanOptions::new().with_region(custom).region, custom);
}

#[test]
fn access_level_serializes_lowercase() {
    let values: Vec<String> = AccessLevel::ALL
        .iter()
        .map(|level| serde_json::to_string(level).unwrap())
        .collect();
    assert_eq!(values, vec!["\"public\"", "\"private\"", "\"unknown\""]);
}

#[test]
fn access_level_parse_is_exact() {
    assert_eq!(AccessLevel::parse("private"), Some(AccessLevel::Private));
    assert_eq!(AccessLevel::parse("Private"), None);
    assert_eq!(AccessLevel::default(), AccessLevel::Unknown);
}

proptest! {
    #[test]
    fn points_inside_ireland_are_contained(lon in -11.0f64..=-5.0, lat in 51.0f64..=56.0) {
        prop_assert!(BoundingBox::IRELAND.contains(Coordinate::new(lon, lat)));
        prop_assert!(Coordinate::new(lon, lat).is_valid());
    }

    #[test]
    fn longitudes_east_of_ireland_are_excluded(lon in -4.99f64..180.0, lat in -90.0f64..=90.0) {
        prop_assert!(!BoundingBox::IRELAND.contains(Coordinate::new(lon, lat)));
    }

    #[test]
    fn parsed_boxes_round_trip(
        min_lon in -180.0f64..0.0,
        width in 0.0f64..180.0,
        min_lat in -90.0f64..0.0,
        height in 0.0f64..90.0,
    ) {
        let original = BoundingBox::new(min_lon, min_lat, min_lon + width, min_lat + height).unwrap();
        let parsed: BoundingBox = original.to_string().parse().unwrap();
        prop_assert_eq!(parsed, original);
    }
}
