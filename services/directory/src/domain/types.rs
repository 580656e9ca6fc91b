use chrono::{DateTime, Utc};

use userdir_domain::credential::PasswordState;
use userdir_domain::email::NormalizedEmail;
use userdir_domain::id::UserRefId;

/// User identity record as seen by the directory.
///
/// The store's internal sequence id is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub ref_id: UserRefId,
    pub firstname: String,
    pub lastname: String,
    /// Always stored trimmed and lower-cased.
    pub email: String,
    pub initials: String,
    pub global: bool,
    pub password: String,
    pub salt: String,
    /// Empty when no reset is pending.
    pub reset: String,
    pub created: DateTime<Utc>,
    pub revised: DateTime<Utc>,
}

impl User {
    pub fn password_state(&self) -> PasswordState {
        PasswordState::from_columns(&self.password, &self.reset)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_owned()
    }
}

/// Provisioning input. Timestamps and the reset token are set by the directory.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub ref_id: UserRefId,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub initials: String,
    pub global: bool,
    /// Password hash, or empty for an invited user who has not chosen one yet.
    pub password: String,
    /// Password salt, or the onboarding serial for an invited user.
    pub salt: String,
}

/// Replacement values for the profile fields of a user.
///
/// This is a full overwrite: every field is written even if unchanged.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub ref_id: UserRefId,
    pub firstname: String,
    pub lastname: String,
    pub email: NormalizedEmail,
    pub initials: String,
    pub revised: DateTime<Utc>,
}
