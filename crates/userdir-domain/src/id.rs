//! Newtype wrappers for domain identifiers.
//!
//! Reference ids are opaque strings: the directory never parses them, it only
//! compares them for equality. Internal sequence ids never leave the store.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_owned()))
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

string_id!(
    /// Public reference id of a user. Stable across the user's lifetime.
    UserRefId
);

string_id!(
    /// Reference id of an organization (tenant).
    OrgId
);

string_id!(
    /// Identifies a space (folder) inside an organization.
    SpaceId
);

impl UserRefId {
    /// Mint a fresh, time-ordered reference id.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }
}
