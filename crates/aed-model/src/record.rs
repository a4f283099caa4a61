//! Raw input features.

use serde_json::{Map, Value};

use crate::skip::SkipReason;

/// One feature from the source collection, before any checks.
///
/// Members keep their JSON form so that explicit `null` and absence stay
/// distinguishable: `None` means the member was missing, `Some(Value::Null)`
/// means it was present and null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub geometry: Option<Value>,
    pub properties: Option<Value>,
}

impl RawRecord {
    /// Borrow a feature from the source collection.
    pub fn from_feature(feature: &Value) -> Result<Self, SkipReason> {
        let object = feature.as_object().ok_or_else(|| SkipReason::NotAFeature {
            found: json_type_name(feature),
        })?;
        Ok(Self::from_object(object))
    }

    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            geometry: object.get("geometry").cloned(),
            properties: object.get("properties").cloned(),
        }
    }
}

/// JSON type name for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn keeps_explicit_null_apart_from_missing() {
        let record = RawRecord::from_feature(&json!({"geometry": null})).unwrap();
        assert_eq!(record.geometry, Some(Value::Null));
        assert_eq!(record.properties, None);
    }

    #[test]
    fn rejects_non_objects() {
        assert_eq!(
            RawRecord::from_feature(&json!([1, 2])),
            Err(SkipReason::NotAFeature { found: "array" })
        );
    }
}
