//! Access tag normalization.

use aed_model::AccessLevel;

/// Map a free-text `access` tag to an [`AccessLevel`].
///
/// Case-insensitive: `yes` and `public` are public, `private` is private.
/// Everything else, including a missing or empty tag, is unknown.
pub fn normalize_access(value: Option<&str>) -> AccessLevel {
    let Some(value) = value.filter(|value| !value.is_empty()) else {
        return AccessLevel::Unknown;
    };
    match value.to_lowercase().as_str() {
        "yes" | "public" => AccessLevel::Public,
        "private" => AccessLevel::Private,
        _ => AccessLevel::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_synonyms() {
        assert_eq!(normalize_access(Some("Yes")), AccessLevel::Public);
        assert_eq!(normalize_access(Some("public")), AccessLevel::Public);
        assert_eq!(normalize_access(Some("PUBLIC")), AccessLevel::Public);
    }

    #[test]
    fn private() {
        assert_eq!(normalize_access(Some("PRIVATE")), AccessLevel::Private);
    }

    #[test]
    fn unknown_fallback() {
        assert_eq!(normalize_access(None), AccessLevel::Unknown);
        assert_eq!(normalize_access(Some("")), AccessLevel::Unknown);
        assert_eq!(normalize_access(Some("members-only")), AccessLevel::Unknown);
        assert_eq!(normalize_access(Some("customers")), AccessLevel::Unknown);
    }

    #[test]
    fn surrounding_whitespace_is_not_ignored() {
        assert_eq!(normalize_access(Some(" yes")), AccessLevel::Unknown);
    }
}
