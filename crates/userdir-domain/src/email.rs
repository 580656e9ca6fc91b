//! Email normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An email address that has been trimmed and lower-cased.
///
/// The only way to build one is through [`NormalizedEmail::new`], so any
/// value of this type is safe to compare against `TRIM(LOWER(email))`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NormalizedEmail(String);

impl NormalizedEmail {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for NormalizedEmail {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<NormalizedEmail> for String {
    fn from(email: NormalizedEmail) -> Self {
        email.0
    }
}

impl fmt::Display for NormalizedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a domain the same way emails are normalized.
pub fn normalize_domain(raw: &str) -> String {
    raw.trim().to_lowercase()
}
