#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use userdir_domain::credential::OnboardingSerial;
use userdir_domain::email::NormalizedEmail;
use userdir_domain::id::{SpaceId, UserRefId};
use userdir_domain::tenant::TenantScope;

use crate::domain::types::{ProfileUpdate, User};
use crate::error::DirectoryError;

/// Read side of the user directory. Usable over any handle, pooled or
/// transactional.
///
/// Single-row lookups return `Ok(None)` when nothing matches; whether that is
/// an error is decided by the caller.
pub trait UserReader: Send + Sync {
    async fn find_by_ref_id(&self, ref_id: &UserRefId) -> Result<Option<User>, DirectoryError>;

    /// Match on email within the organization whose domain equals `domain`
    /// (both compared trimmed and lower-cased). The user must hold a
    /// membership in that organization.
    async fn find_by_domain(
        &self,
        domain: &str,
        email: &NormalizedEmail,
    ) -> Result<Option<User>, DirectoryError>;

    /// Match on email across all organizations.
    async fn find_by_email(
        &self,
        email: &NormalizedEmail,
    ) -> Result<Option<User>, DirectoryError>;

    async fn find_by_reset_token(&self, token: &str) -> Result<Option<User>, DirectoryError>;

    /// Match on the `salt` column, which holds the onboarding serial until a
    /// real password is set.
    async fn find_by_serial(
        &self,
        serial: &OnboardingSerial,
    ) -> Result<Option<User>, DirectoryError>;

    /// Users with an active membership in the tenant, ordered by first then last name.
    async fn list_active_in_org(&self, scope: &TenantScope) -> Result<Vec<User>, DirectoryError>;

    /// Users with any membership in the tenant, active or not. Same ordering.
    async fn list_in_org(&self, scope: &TenantScope) -> Result<Vec<User>, DirectoryError>;

    /// Users with an active membership in the tenant and a grant on `space`.
    async fn list_space_members(
        &self,
        scope: &TenantScope,
        space: &SpaceId,
    ) -> Result<Vec<User>, DirectoryError>;

    /// Distinct users holding at least one active membership anywhere.
    async fn count_active(&self) -> Result<u64, DirectoryError>;
}

/// Write side of the user directory. Implemented only over a transaction.
pub trait UserWriter: Send + Sync {
    async fn insert(&self, user: &User) -> Result<(), DirectoryError>;

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), DirectoryError>;

    /// Set salt and password and clear any pending reset token.
    async fn update_password(
        &self,
        ref_id: &UserRefId,
        salt: &str,
        password: &str,
        revised: DateTime<Utc>,
    ) -> Result<(), DirectoryError>;

    /// Set the reset token and clear the password for every user whose
    /// normalized email matches. Matching nobody is not an error.
    async fn set_reset_token(
        &self,
        email: &NormalizedEmail,
        token: &str,
        revised: DateTime<Utc>,
    ) -> Result<(), DirectoryError>;

    /// Delete the user's membership in the tenant. Other tenants and the user
    /// row itself are untouched; deleting nothing is not an error.
    async fn remove_membership(
        &self,
        scope: &TenantScope,
        ref_id: &UserRefId,
    ) -> Result<(), DirectoryError>;
}
