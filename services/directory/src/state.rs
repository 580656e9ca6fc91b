use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::config::DirectoryConfig;
use crate::error::DirectoryError;
use crate::infra::db::DbUserStore;
use crate::usecase::listing::CountActiveUsersUseCase;

/// Shared handle bundle for callers of the directory.
///
/// Reads go through `reader()`; writes open a transaction with `begin()` and
/// wrap it in `DbUserStore::new(&txn)`. Committing is the caller's call.
#[derive(Clone)]
pub struct DirectoryState {
    pub db: DatabaseConnection,
    pub config: Arc<DirectoryConfig>,
}

impl DirectoryState {
    pub fn new(db: DatabaseConnection, config: DirectoryConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Connect using `config.database_url`.
    pub async fn connect(config: DirectoryConfig) -> Result<Self, DirectoryError> {
        let db = userdir_core::db::connect(&config.database_url)
            .await
            .context("connect to directory database")?;
        Ok(Self::new(db, config))
    }

    pub fn reader(&self) -> DbUserStore<'_, DatabaseConnection> {
        DbUserStore::new(&self.db)
    }

    pub async fn begin(&self) -> Result<DatabaseTransaction, DirectoryError> {
        let txn = self
            .db
            .begin()
            .await
            .context("begin directory transaction")?;
        Ok(txn)
    }

    pub async fn is_ready(&self) -> bool {
        userdir_core::db::is_ready(&self.db).await
    }

    /// Active-user count wired to the configured failure policy.
    pub fn count_active_users(
        &self,
    ) -> CountActiveUsersUseCase<DbUserStore<'_, DatabaseConnection>> {
        CountActiveUsersUseCase {
            repo: self.reader(),
            failure_returns_zero: self.config.count_failure_returns_zero,
        }
    }
}
