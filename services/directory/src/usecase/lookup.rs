use userdir_domain::credential::OnboardingSerial;
use userdir_domain::email::NormalizedEmail;
use userdir_domain::id::UserRefId;

use crate::domain::repository::UserReader;
use crate::domain::types::User;
use crate::error::DirectoryError;

// ── Get ──────────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserReader> {
    pub repo: R,
}

impl<R: UserReader> GetUserUseCase<R> {
    pub async fn execute(&self, ref_id: &UserRefId) -> Result<User, DirectoryError> {
        self.repo
            .find_by_ref_id(ref_id)
            .await?
            .ok_or(DirectoryError::NotFound)
    }
}

// ── GetByDomain ──────────────────────────────────────────────────────────────

pub struct GetUserByDomainUseCase<R: UserReader> {
    pub repo: R,
}

impl<R: UserReader> GetUserByDomainUseCase<R> {
    /// Tenant-scoped email lookup. `None` means no user with that email holds
    /// a membership in the organization owning `domain`; callers must not
    /// distinguish that from a wrong password when reporting to end users.
    pub async fn execute(&self, domain: &str, email: &str) -> Result<Option<User>, DirectoryError> {
        let email = NormalizedEmail::new(email);
        if email.is_empty() {
            return Ok(None);
        }
        self.repo.find_by_domain(domain, &email).await
    }
}

// ── GetByEmail ───────────────────────────────────────────────────────────────

pub struct GetUserByEmailUseCase<R: UserReader> {
    pub repo: R,
}

impl<R: UserReader> GetUserByEmailUseCase<R> {
    /// Global (cross-tenant) email lookup. `None` when nothing matches.
    pub async fn execute(&self, email: &str) -> Result<Option<User>, DirectoryError> {
        let email = NormalizedEmail::new(email);
        if email.is_empty() {
            return Ok(None);
        }
        self.repo.find_by_email(&email).await
    }
}

// ── GetByToken ───────────────────────────────────────────────────────────────

pub struct GetUserByTokenUseCase<R: UserReader> {
    pub repo: R,
}

impl<R: UserReader> GetUserByTokenUseCase<R> {
    pub async fn execute(&self, token: &str) -> Result<User, DirectoryError> {
        // Every user without a pending reset stores '' here.
        if token.is_empty() {
            return Err(DirectoryError::NotFound);
        }
        self.repo
            .find_by_reset_token(token)
            .await?
            .ok_or(DirectoryError::NotFound)
    }
}

// ── GetBySerial ──────────────────────────────────────────────────────────────

pub struct GetUserBySerialUseCase<R: UserReader> {
    pub repo: R,
}

impl<R: UserReader> GetUserBySerialUseCase<R> {
    /// Resolve an invited user from their onboarding serial.
    pub async fn execute(&self, serial: &OnboardingSerial) -> Result<User, DirectoryError> {
        if serial.as_str().is_empty() {
            return Err(DirectoryError::NotFound);
        }
        self.repo
            .find_by_serial(serial)
            .await?
            .ok_or(DirectoryError::NotFound)
    }
}
