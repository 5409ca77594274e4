//! SQLite connector and helpers

mod config;
mod connector;
mod health;
mod schema;

pub use config::SqliteConfig;
pub use connector::connect;
pub use health::check_health;
pub use schema::{BOOTSTRAP_TIMEOUT, bootstrap};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
