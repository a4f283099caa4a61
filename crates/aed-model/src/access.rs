use std::fmt;

use serde::{Deserialize, Serialize};

/// Who may use a defibrillator.
///
/// `Unknown` covers both a missing `access` tag and one that could not be
/// recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Public,
    Private,
    #[default]
    Unknown,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 3] = [
        AccessLevel::Public,
        AccessLevel::Private,
        AccessLevel::Unknown,
    ];

    /// Canonical output value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Public => "public",
            AccessLevel::Private => "private",
            AccessLevel::Unknown => "unknown",
        }
    }

    /// Parse a canonical value (exact match only).
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
