//! Small field rules used by document assembly.

use serde_json::Value;

/// Name given to every device; prefixed with the operator when known.
pub const AED_NAME: &str = "AED";

/// `"<operator> AED"`, or `"AED"` when the operator is missing or empty.
pub fn derive_name(operator: Option<&str>) -> String {
    match operator.filter(|operator| !operator.is_empty()) {
        Some(operator) => format!("{operator} {AED_NAME}"),
        None => AED_NAME.to_string(),
    }
}

/// Indoor only when the tag is exactly the string `yes`.
pub fn is_indoor(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(tag)) if tag == "yes")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn name_uses_operator() {
        assert_eq!(derive_name(Some("HSE")), "HSE AED");
        assert_eq!(derive_name(Some("")), "AED");
        assert_eq!(derive_name(None), "AED");
    }

    #[test]
    fn indoor_requires_exact_yes() {
        assert!(is_indoor(Some(&json!("yes"))));
        assert!(!is_indoor(Some(&json!("Yes"))));
        assert!(!is_indoor(Some(&json!("no"))));
        assert!(!is_indoor(Some(&json!(true))));
        assert!(!is_indoor(None));
    }
}
