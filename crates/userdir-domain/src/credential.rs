//! Password / reset state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Authentication state of a user record, derived from its password and
/// reset columns.
///
/// Transitions:
/// - provisioning without a password → `Unset`
/// - password update (from any state) → `Active`
/// - forgot-password request (from any state) → `ResetPending`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordState {
    Unset,
    Active,
    ResetPending,
}

impl PasswordState {
    /// Derive the state from the stored `password` and `reset` values.
    ///
    /// A pending reset wins over a stale password hash, matching the store
    /// which clears the password whenever a reset token is set.
    pub fn from_columns(password: &str, reset: &str) -> Self {
        if !reset.is_empty() {
            Self::ResetPending
        } else if !password.is_empty() {
            Self::Active
        } else {
            Self::Unset
        }
    }

    pub fn can_authenticate(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// One-time onboarding serial handed to a newly invited user.
///
/// The serial is stored in the user's `salt` column until a real password
/// (and salt) is set, after which it no longer resolves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OnboardingSerial(pub String);

impl OnboardingSerial {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OnboardingSerial {
    fn from(serial: &str) -> Self {
        Self(serial.to_owned())
    }
}

impl From<String> for OnboardingSerial {
    fn from(serial: String) -> Self {
        Self(serial)
    }
}

// Serials and reset tokens are credentials; keep them out of Display-based logs.
impl fmt::Display for OnboardingSerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<serial>")
    }
}
