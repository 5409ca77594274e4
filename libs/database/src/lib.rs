//! SQLite connectivity for the todo services, built on SeaORM.
//!
//! ```ignore
//! use database::sqlite::{self, SqliteConfig};
//!
//! let db = sqlite::connect(SqliteConfig::for_file("todo.db")).await?;
//! sqlite::bootstrap(&db, &[CREATE_TASK_TABLE]).await?;
//! sqlite::check_health(&db).await?;
//! ```

pub mod common;
pub mod sqlite;

pub use common::{DatabaseError, DatabaseResult};
