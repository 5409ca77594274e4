use std::time::Duration;

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::info;

use crate::common::{DatabaseError, DatabaseResult};

/// Deadline for schema bootstrap, independent of request deadlines.
pub const BOOTSTRAP_TIMEOUT: Duration = Duration::from_secs(1);

/// Run idempotent DDL statements, all within [`BOOTSTRAP_TIMEOUT`].
pub async fn bootstrap(db: &DatabaseConnection, ddl: &[&str]) -> DatabaseResult<()> {
    let run = async {
        for sql in ddl {
            db.execute_raw(Statement::from_string(DatabaseBackend::Sqlite, (*sql).to_owned()))
                .await?;
        }
        Ok::<_, DatabaseError>(())
    };

    tokio::time::timeout(BOOTSTRAP_TIMEOUT, run)
        .await
        .map_err(|_| DatabaseError::BootstrapTimeout(BOOTSTRAP_TIMEOUT))??;

    info!(statements = ddl.len(), "Schema bootstrap complete");
    Ok(())
}
