use async_trait::async_trait;

use crate::error::TaskResult;
use crate::models::{NewTask, Task};

/// Repository trait for Task persistence
///
/// Implementations must tolerate concurrent readers: the export stream issues
/// several `search_range` calls at once.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Total number of rows
    async fn count(&self) -> TaskResult<u32>;

    /// Store a new task and return its assigned id
    async fn insert(&self, input: NewTask) -> TaskResult<i64>;

    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>>;

    /// Overwrite status and description. Matching no row is not an error.
    async fn update(&self, task: Task) -> TaskResult<()>;

    /// Remove a task. Removing a missing id is not an error.
    async fn delete(&self, id: i64) -> TaskResult<()>;

    /// Up to `limit` tasks ordered by id, skipping the first `offset`
    async fn search_range(&self, limit: u32, offset: u32) -> TaskResult<Vec<Task>>;
}
