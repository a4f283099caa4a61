//! Property extraction.
//!
//! Source features are OpenStreetMap-style: properties are a flat map of
//! string tags. Only the tags the clean schema uses are read.

use serde_json::{Map, Value};

use aed_model::record::json_type_name;
use aed_model::{RawRecord, SkipReason};

use crate::normalization::is_indoor;

/// Source property keys.
pub mod keys {
    pub const PROPERTIES: &str = "properties";
    pub const ADDRESS: &str = "address";
    pub const OPERATOR: &str = "operator";
    pub const INDOOR: &str = "indoor";
    pub const ACCESS: &str = "access";
    pub const LOCATION: &str = "defibrillator:location";
    pub const LOCATION_EN: &str = "defibrillator:location:en";
    pub const OPENING_HOURS: &str = "opening_hours";
    pub const CHECK_DATE: &str = "check_date";
    pub const SURVEY_DATE: &str = "survey:date";
}

/// Property values read from one feature.
///
/// Tags with a fallback (`description`, `last_checked`) are already resolved
/// here, so only the tag that is actually used has been type-checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedProperties {
    pub address: Option<String>,
    pub operator: Option<String>,
    pub indoor: bool,
    pub access: Option<String>,
    /// `defibrillator:location`, else `defibrillator:location:en`.
    pub description: Option<String>,
    pub opening_hours: Option<String>,
    /// `check_date`, else `survey:date`.
    pub last_checked: Option<String>,
}

/// Read the schema's source tags from a record.
///
/// A missing property map is treated as empty. String tags are kept
/// verbatim. A falsy non-string (`null`, `false`, `0`, `[]`, `{}`) counts as
/// missing; any other non-string is an [`SkipReason::UnexpectedFieldType`].
/// The `indoor` tag is reduced to a flag and never fails.
pub fn extract_properties(record: &RawRecord) -> Result<ExtractedProperties, SkipReason> {
    let empty = Map::new();
    let properties = match &record.properties {
        None => &empty,
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(SkipReason::UnexpectedFieldType {
                field: keys::PROPERTIES.to_string(),
                found: json_type_name(other),
            });
        }
    };

    Ok(ExtractedProperties {
        address: text(properties, keys::ADDRESS)?,
        operator: text(properties, keys::OPERATOR)?,
        indoor: is_indoor(properties.get(keys::INDOOR)),
        access: text(properties, keys::ACCESS)?,
        description: text(
            properties,
            choose(properties, keys::LOCATION, keys::LOCATION_EN),
        )?,
        opening_hours: text(properties, keys::OPENING_HOURS)?,
        last_checked: text(
            properties,
            choose(properties, keys::CHECK_DATE, keys::SURVEY_DATE),
        )?,
    })
}

/// `primary` when its value is truthy, otherwise `fallback`.
fn choose(
    properties: &Map<String, Value>,
    primary: &'static str,
    fallback: &'static str,
) -> &'static str {
    match properties.get(primary) {
        Some(value) if is_truthy(value) => primary,
        _ => fallback,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn text(properties: &Map<String, Value>, key: &str) -> Result<Option<String>, SkipReason> {
    match properties.get(key) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) if !is_truthy(other) => Ok(None),
        Some(other) => Err(SkipReason::UnexpectedFieldType {
            field: key.to_string(),
            found: json_type_name(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(properties: Value) -> RawRecord {
        RawRecord {
            geometry: None,
            properties: Some(properties),
        }
    }

    #[test]
    fn reads_known_tags() {
        let extracted = extract_properties(&record(json!({
            "operator": "HSE",
            "indoor": "yes",
            "access": "yes",
            "check_date": "2023-12-14",
            "defibrillator:location:en": "Inside the main entrance",
            "emergency": "defibrillator"
        })))
        .unwrap();

        assert_eq!(extracted.operator.as_deref(), Some("HSE"));
        assert!(extracted.indoor);
        assert_eq!(extracted.access.as_deref(), Some("yes"));
        assert_eq!(extracted.last_checked.as_deref(), Some("2023-12-14"));
        assert_eq!(
            extracted.description.as_deref(),
            Some("Inside the main entrance")
        );
        assert_eq!(extracted.address, None);
    }

    #[test]
    fn missing_properties_are_empty() {
        let extracted = extract_properties(&RawRecord::default()).unwrap();
        assert_eq!(extracted, ExtractedProperties::default());
    }

    #[test]
    fn null_tags_are_missing() {
        let extracted = extract_properties(&record(json!({"operator": null}))).unwrap();
        assert_eq!(extracted.operator, None);
    }

    #[test]
    fn non_object_properties_are_rejected() {
        assert_eq!(
            extract_properties(&record(Value::Null)),
            Err(SkipReason::UnexpectedFieldType {
                field: "properties".to_string(),
                found: "null",
            })
        );
    }

    #[test]
    fn non_string_tags_are_rejected() {
        assert_eq!(
            extract_properties(&record(json!({"access": 1}))),
            Err(SkipReason::UnexpectedFieldType {
                field: "access".to_string(),
                found: "number",
            })
        );
    }

    #[test]
    fn falsy_non_strings_are_missing() {
        let extracted =
            extract_properties(&record(json!({"access": false, "address": 0, "operator": []})))
                .unwrap();
        assert_eq!(extracted.access, None);
        assert_eq!(extracted.address, None);
        assert_eq!(extracted.operator, None);
    }

    #[test]
    fn unused_fallback_is_not_checked() {
        let extracted = extract_properties(&record(json!({
            "check_date": "2023-12-14",
            "survey:date": 20231214,
            "defibrillator:location": "Lobby",
            "defibrillator:location:en": {"text": "Lobby"}
        })))
        .unwrap();
        assert_eq!(extracted.last_checked.as_deref(), Some("2023-12-14"));
        assert_eq!(extracted.description.as_deref(), Some("Lobby"));
    }

    #[test]
    fn empty_primary_uses_fallback() {
        let extracted = extract_properties(&record(json!({
            "check_date": "",
            "survey:date": "24:11:2023",
            "defibrillator:location": null,
            "defibrillator:location:en": "By reception"
        })))
        .unwrap();
        assert_eq!(extracted.last_checked.as_deref(), Some("24:11:2023"));
        assert_eq!(extracted.description.as_deref(), Some("By reception"));
    }

    #[test]
    fn used_fallback_is_checked() {
        assert_eq!(
            extract_properties(&record(json!({"check_date": "", "survey:date": 20231214}))),
            Err(SkipReason::UnexpectedFieldType {
                field: "survey:date".to_string(),
                found: "number",
            })
        );
    }

    #[test]
    fn non_string_indoor_is_outdoor() {
        let extracted = extract_properties(&record(json!({"indoor": true}))).unwrap();
        assert!(!extracted.indoor);
    }
}
