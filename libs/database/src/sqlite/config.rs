use sea_orm::ConnectOptions;
use std::path::Path;
use std::time::Duration;
use tracing::log::LevelFilter;

/// SQLite connection pool settings
///
/// ```ignore
/// let config = SqliteConfig::for_file("users.db").with_max_connections(4);
/// let db = database::sqlite::connect(config).await?;
/// ```
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub sqlx_logging: bool,
    pub sqlx_logging_level: LevelFilter,
}

impl SqliteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 16,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(8),
            sqlx_logging: true,
            sqlx_logging_level: LevelFilter::Debug,
        }
    }

    /// A database file, created when missing.
    pub fn for_file(path: impl AsRef<Path>) -> Self {
        Self::new(format!("sqlite://{}?mode=rwc", path.as_ref().display()))
    }

    /// A private in-memory database.
    ///
    /// Every pooled connection would see its own empty database, so the pool is
    /// pinned to a single connection.
    pub fn in_memory() -> Self {
        let mut config = Self::new("sqlite::memory:");
        config.max_connections = 1;
        config.min_connections = 1;
        config
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn without_sql_logging(mut self) -> Self {
        self.sqlx_logging = false;
        self
    }

    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(self.sqlx_logging_level);
        opt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_file_creates_missing_database() {
        let config = SqliteConfig::for_file("todo.db");
        assert_eq!(config.url, "sqlite://todo.db?mode=rwc");
        assert_eq!(config.max_connections, 16);
    }

    #[test]
    fn test_in_memory_uses_one_connection() {
        let config = SqliteConfig::in_memory();
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn test_into_connect_options() {
        let options = SqliteConfig::for_file("users.db")
            .with_max_connections(4)
            .into_connect_options();
        assert_eq!(options.get_url(), "sqlite://users.db?mode=rwc");
        assert_eq!(options.get_max_connections(), Some(4));
    }
}
