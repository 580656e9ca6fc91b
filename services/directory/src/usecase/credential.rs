use chrono::Utc;

use userdir_domain::email::NormalizedEmail;
use userdir_domain::id::UserRefId;
use userdir_domain::tenant::TenantScope;

use crate::domain::repository::UserWriter;
use crate::error::DirectoryError;

// ── UpdateUserPassword ───────────────────────────────────────────────────────

pub struct UpdateUserPasswordInput {
    pub ref_id: UserRefId,
    /// Salt produced by the caller's hashing layer.
    pub salt: String,
    /// Password hash produced by the caller's hashing layer.
    pub password: String,
}

pub struct UpdateUserPasswordUseCase<W: UserWriter> {
    pub repo: W,
}

impl<W: UserWriter> UpdateUserPasswordUseCase<W> {
    /// Moves the user to the active password state: sets salt and password
    /// and closes any pending reset. The old salt, and with it any onboarding
    /// serial, stops resolving.
    pub async fn execute(&self, input: UpdateUserPasswordInput) -> Result<(), DirectoryError> {
        self.repo
            .update_password(&input.ref_id, &input.salt, &input.password, Utc::now())
            .await?;
        tracing::info!(user_id = %input.ref_id, "user password updated");
        Ok(())
    }
}

// ── ForgotUserPassword ───────────────────────────────────────────────────────

pub struct ForgotUserPasswordUseCase<W: UserWriter> {
    pub repo: W,
}

impl<W: UserWriter> ForgotUserPasswordUseCase<W> {
    /// Moves the user to the reset-pending state: stores `token` and clears
    /// the password. An unknown email is accepted silently.
    pub async fn execute(&self, email: &str, token: &str) -> Result<(), DirectoryError> {
        if token.is_empty() {
            return Err(DirectoryError::InvalidArgument("empty reset token"));
        }
        let email = NormalizedEmail::new(email);
        if email.is_empty() {
            return Ok(());
        }
        self.repo.set_reset_token(&email, token, Utc::now()).await
    }
}

// ── DeactiveUser ─────────────────────────────────────────────────────────────

pub struct DeactivateUserUseCase<W: UserWriter> {
    pub repo: W,
}

impl<W: UserWriter> DeactivateUserUseCase<W> {
    /// Remove the user's membership in the tenant. Idempotent.
    pub async fn execute(
        &self,
        scope: &TenantScope,
        ref_id: &UserRefId,
    ) -> Result<(), DirectoryError> {
        self.repo.remove_membership(scope, ref_id).await?;
        tracing::info!(user_id = %ref_id, org_id = %scope.org_id(), "user deactivated");
        Ok(())
    }
}
