//! Todo gRPC Service
//!
//! Serves `todo.v1.TodoService` over a SQLite task table.
//!
//! ## Architecture
//!
//! ```text
//! Gateway (authorized channel)
//!   ↓ (gRPC with Zstd compression)
//! TodoServiceImpl (service.rs)
//!   ↓ (proto ↔ domain conversions via From)
//! TaskService (domain layer, export streamer)
//!   ↓
//! SqliteTaskRepository
//! ```
//!
//! ## Modules
//!
//! - `config`: command line / environment configuration
//! - `server`: Server initialization and lifecycle
//! - `service`: gRPC service implementation (TodoServiceImpl)

pub mod config;
pub mod server;
pub mod service;

// Re-export for convenience
pub use config::Config;
pub use server::{run, todo_server};
pub use service::TodoServiceImpl;
