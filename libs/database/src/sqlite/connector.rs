use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use super::SqliteConfig;
use crate::common::{DatabaseError, DatabaseResult};

/// Open a pooled SQLite connection.
pub async fn connect(config: SqliteConfig) -> DatabaseResult<DatabaseConnection> {
    let url = config.url.clone();
    let db = Database::connect(config.into_connect_options())
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(format!("{url}: {e}")))?;

    info!(url = %url, "Connected to SQLite database");
    Ok(db)
}
