//! Tasks Domain
//!
//! Task records, their store, and the windowed export stream.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← CRUD semantics, list, export stream
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Pagination  │  ← concurrent range queries per window
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SQLite implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Task, Page, Window
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{SqliteTaskRepository, TaskService, CREATE_TASK_TABLE};
//! use database::sqlite::{self, SqliteConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = sqlite::connect(SqliteConfig::for_file("todo.db")).await?;
//! sqlite::bootstrap(&db, &[CREATE_TASK_TABLE]).await?;
//!
//! let service = TaskService::new(SqliteTaskRepository::new(db));
//! # Ok(())
//! # }
//! ```

pub mod conversions;
pub mod entity;
pub mod error;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod service;
pub mod sqlite;

pub use error::{TaskError, TaskResult};
pub use models::{DEFAULT_CONCURRENCY, DEFAULT_LIMIT, NewTask, Page, PageRequest, Task, Window};
pub use pagination::{
    PAGE_BUFFER, PageReceiver, PageSender, PageSink, StreamSummary, page_channel, stream_pages,
};
pub use repository::TaskRepository;
pub use service::TaskService;
pub use sqlite::{CREATE_TASK_TABLE, SqliteTaskRepository};
