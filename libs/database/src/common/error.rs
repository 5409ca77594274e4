use std::time::Duration;

/// Errors raised while connecting to or preparing a database
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] sea_orm::DbErr),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Schema bootstrap did not finish within its deadline
    #[error("Schema bootstrap timed out after {0:?}")]
    BootstrapTimeout(Duration),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
