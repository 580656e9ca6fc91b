use userdir_domain::id::SpaceId;
use userdir_domain::tenant::TenantScope;

use crate::domain::repository::UserReader;
use crate::domain::types::User;
use crate::error::DirectoryError;

// ── GetActiveUsersForOrganization ────────────────────────────────────────────

pub struct ListActiveUsersUseCase<R: UserReader> {
    pub repo: R,
}

impl<R: UserReader> ListActiveUsersUseCase<R> {
    pub async fn execute(&self, scope: &TenantScope) -> Result<Vec<User>, DirectoryError> {
        self.repo.list_active_in_org(scope).await
    }
}

// ── GetUsersForOrganization ──────────────────────────────────────────────────

pub struct ListOrganizationUsersUseCase<R: UserReader> {
    pub repo: R,
}

impl<R: UserReader> ListOrganizationUsersUseCase<R> {
    /// Includes users whose membership is inactive.
    pub async fn execute(&self, scope: &TenantScope) -> Result<Vec<User>, DirectoryError> {
        self.repo.list_in_org(scope).await
    }
}

// ── GetSpaceUsers ────────────────────────────────────────────────────────────

pub struct ListSpaceUsersUseCase<R: UserReader> {
    pub repo: R,
}

impl<R: UserReader> ListSpaceUsersUseCase<R> {
    pub async fn execute(
        &self,
        scope: &TenantScope,
        space: &SpaceId,
    ) -> Result<Vec<User>, DirectoryError> {
        self.repo.list_space_members(scope, space).await
    }
}

// ── CountActiveUsers ─────────────────────────────────────────────────────────

pub struct CountActiveUsersUseCase<R: UserReader> {
    pub repo: R,
    /// Report a failed count as 0 (logged) instead of returning the error.
    pub failure_returns_zero: bool,
}

impl<R: UserReader> CountActiveUsersUseCase<R> {
    pub async fn execute(&self) -> Result<u64, DirectoryError> {
        match self.repo.count_active().await {
            Ok(count) => Ok(count),
            Err(e) if self.failure_returns_zero => {
                tracing::error!(error = %e, kind = e.kind(), "count active users failed; reporting 0");
                Ok(0)
            }
            Err(e) => Err(e),
        }
    }
}
