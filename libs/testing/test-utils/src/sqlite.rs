//! SQLite test infrastructure

use database::sqlite::{self, SqliteConfig};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// An isolated database that disappears when dropped.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
    // Keeps file-backed databases alive for the lifetime of the test.
    _dir: Option<TempDir>,
}

impl TestDatabase {
    /// In-memory database on a single connection.
    pub async fn new(ddl: &[&str]) -> Self {
        let connection = sqlite::connect(SqliteConfig::in_memory().without_sql_logging())
            .await
            .expect("Failed to open in-memory database");
        Self::prepare(connection, ddl, None).await
    }

    /// File-backed database with a real pool, for tests that need
    /// concurrent readers.
    pub async fn pooled(ddl: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = SqliteConfig::for_file(dir.path().join("test.db"))
            .with_max_connections(8)
            .without_sql_logging();
        let connection = sqlite::connect(config)
            .await
            .expect("Failed to open test database file");
        Self::prepare(connection, ddl, Some(dir)).await
    }

    async fn prepare(connection: DatabaseConnection, ddl: &[&str], dir: Option<TempDir>) -> Self {
        sqlite::bootstrap(&connection, ddl)
            .await
            .expect("Failed to bootstrap test schema");

        tracing::debug!(pooled = dir.is_some(), "Test database ready");

        Self { connection, _dir: dir }
    }

    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
