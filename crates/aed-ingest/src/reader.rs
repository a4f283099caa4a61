//! Input file reading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Top-level layout of the input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    /// `{"type": "FeatureCollection", "features": [...]}`
    FeatureCollection,
    /// `[...]`
    FeatureArray,
}

/// Read the input file and return its features in source order.
pub fn read_features(path: &Path) -> Result<Vec<Value>> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|source| IngestError::Json {
        path: Some(path.to_path_buf()),
        source,
    })?;
    let (shape, features) = unwrap_features(value)?;
    debug!(
        input = %path.display(),
        bytes = bytes.len(),
        shape = ?shape,
        feature_count = features.len(),
        "read input"
    );
    Ok(features)
}

/// Parse features from JSON text.
pub fn parse_features(text: &str) -> Result<Vec<Value>> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| IngestError::Json { path: None, source })?;
    unwrap_features(value).map(|(_, features)| features)
}

/// Pull the feature list out of a parsed document.
pub fn unwrap_features(value: Value) -> Result<(InputShape, Vec<Value>)> {
    match value {
        Value::Array(features) => Ok((InputShape::FeatureArray, features)),
        Value::Object(mut object) => match object.remove("features") {
            Some(Value::Array(features)) => Ok((InputShape::FeatureCollection, features)),
            Some(other) => Err(IngestError::UnexpectedShape {
                reason: format!("`features` is {}, expected an array", type_name(&other)),
            }),
            None => Err(IngestError::UnexpectedShape {
                reason: "object has no `features` member".to_string(),
            }),
        },
        other => Err(IngestError::UnexpectedShape {
            reason: format!(
                "top-level value is {}, expected an object or array",
                type_name(&other)
            ),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_feature_collection() {
        let value = json!({
            "type": "FeatureCollection",
            "features": [{"type": "Feature"}, {"type": "Feature"}]
        });
        let (shape, features) = unwrap_features(value).unwrap();
        assert_eq!(shape, InputShape::FeatureCollection);
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn test_unwrap_bare_array_keeps_non_objects() {
        let (shape, features) = unwrap_features(json!([1, {"geometry": null}])).unwrap();
        assert_eq!(shape, InputShape::FeatureArray);
        assert_eq!(features, vec![json!(1), json!({"geometry": null})]);
    }

    #[test]
    fn test_unwrap_rejects_other_shapes() {
        for value in [json!({"type": "Feature"}), json!({"features": null}), json!("x")] {
            assert!(matches!(
                unwrap_features(value),
                Err(IngestError::UnexpectedShape { .. })
            ));
        }
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_features("{\"features\": ["),
            Err(IngestError::Json { path: None, .. })
        ));
    }
}
