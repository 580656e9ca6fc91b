use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use userdir_directory_migration::Migrator;

/// An isolated in-memory database with the full directory schema.
///
/// Each `TestDb` owns a single pooled connection, so the in-memory database
/// lives exactly as long as the value. Commit or drop an open transaction
/// before issuing reads through `conn()`, otherwise the read waits for the
/// only connection.
pub struct TestDb {
    conn: DatabaseConnection,
}

impl TestDb {
    /// Open a fresh database and run all migrations.
    ///
    /// Panics on failure; tests cannot proceed without a schema.
    pub async fn new() -> Self {
        let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
        opts.max_connections(1)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(5))
            .sqlx_logging(false);
        let conn = Database::connect(opts)
            .await
            .expect("open in-memory sqlite");
        Migrator::up(&conn, None)
            .await
            .expect("apply directory migrations");
        Self { conn }
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Hand out a clone of the connection, e.g. to build a `DirectoryState`.
    pub fn clone_conn(&self) -> DatabaseConnection {
        self.conn.clone()
    }
}
