use std::sync::Arc;

use tracing::{Instrument, instrument};

use crate::error::{TaskError, TaskResult};
use crate::models::{NewTask, Page, PageRequest, Task, Window};
use crate::pagination::{PAGE_BUFFER, PageReceiver, page_channel, stream_pages};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
    max_concurrency: Option<u32>,
}

impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            max_concurrency: self.max_concurrency,
        }
    }
}

impl<R: TaskRepository + 'static> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            max_concurrency: None,
        }
    }

    /// Cap the number of range queries a single export window may run.
    pub fn with_max_concurrency(mut self, max: Option<u32>) -> Self {
        self.max_concurrency = max;
        self
    }

    /// Store a task and return it as persisted
    #[instrument(skip(self, input), fields(status = input.status))]
    pub async fn create_task(&self, input: NewTask) -> TaskResult<Task> {
        let id = self.repository.insert(input).await?;
        self.get_task(id).await
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = id))]
    pub async fn get_task(&self, id: i64) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Overwrite a task and return the stored version.
    ///
    /// Updating an unknown id writes nothing; the read-back reports `NotFound`.
    #[instrument(skip(self, task), fields(task_id = task.id))]
    pub async fn update_task(&self, task: Task) -> TaskResult<Task> {
        let id = task.id;
        self.repository.update(task).await?;
        self.get_task(id).await
    }

    /// Delete a task. Deleting a missing id succeeds.
    #[instrument(skip(self), fields(task_id = id))]
    pub async fn delete_task(&self, id: i64) -> TaskResult<()> {
        self.repository.delete(id).await
    }

    /// One page of tasks ordered by id
    #[instrument(skip(self))]
    pub async fn list_tasks(&self, request: PageRequest) -> TaskResult<Page> {
        let total = self.repository.count().await?;
        let limit = request.effective_limit();
        let tasks = self.repository.search_range(limit, request.offset).await?;

        Ok(Page {
            tasks,
            total,
            limit,
            offset: request.offset,
        })
    }

    /// Export the table as a stream of pages.
    ///
    /// The export runs on its own task, moves to the next window only after the
    /// previous one has been read, and stops once the returned stream is
    /// dropped. A failure is delivered as the final item.
    pub fn stream_tasks(&self, window: Window) -> PageReceiver {
        let window = window.clamp_concurrency(self.max_concurrency);
        let repository = Arc::clone(&self.repository);
        let (tx, rx) = page_channel(PAGE_BUFFER);
        let span = tracing::info_span!(
            "stream_tasks",
            limit = window.limit,
            offset = window.offset,
            concurrency = window.concurrency
        );

        tokio::spawn(
            async move {
                match stream_pages(repository, window, tx.clone()).await {
                    Ok(summary) => {
                        tracing::info!(
                            windows = summary.windows,
                            pages = summary.pages,
                            "Task export completed"
                        );
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Task export aborted");
                        tx.fail(err).await;
                    }
                }
            }
            .instrument(span),
        );

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTaskRepository;
    use futures::StreamExt;
    use mockall::predicate::eq;

    fn task(id: i64) -> Task {
        Task {
            id,
            status: false,
            description: format!("task {id}"),
        }
    }

    #[tokio::test]
    async fn test_create_task_reads_back_stored_row() {
        let mut repo = MockTaskRepository::new();
        repo.expect_insert()
            .withf(|input| input.description == "task 7")
            .returning(|_| Ok(7));
        repo.expect_get_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(task(id))));

        let service = TaskService::new(repo);
        let created = service
            .create_task(NewTask {
                status: false,
                description: "task 7".into(),
            })
            .await
            .unwrap();

        assert_eq!(created, task(7));
    }

    #[tokio::test]
    async fn test_get_task_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = TaskService::new(repo);
        let err = service.get_task(3).await.unwrap_err();

        assert!(matches!(err, TaskError::NotFound(3)));
    }

    #[tokio::test]
    async fn test_update_missing_task_reports_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_update().times(1).returning(|_| Ok(()));
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = TaskService::new(repo);
        let err = service.update_task(task(9)).await.unwrap_err();

        assert!(matches!(err, TaskError::NotFound(9)));
    }

    #[tokio::test]
    async fn test_delete_is_forwarded() {
        let mut repo = MockTaskRepository::new();
        repo.expect_delete().with(eq(4)).times(1).returning(|_| Ok(()));

        let service = TaskService::new(repo);
        service.delete_task(4).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_tasks_applies_default_limit() {
        let mut repo = MockTaskRepository::new();
        repo.expect_count().times(1).returning(|| Ok(2));
        repo.expect_search_range()
            .with(eq(crate::DEFAULT_LIMIT), eq(0))
            .returning(|_, _| Ok(vec![task(1), task(2)]));

        let service = TaskService::new(repo);
        let page = service.list_tasks(PageRequest::new(0, 0)).await.unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.limit, crate::DEFAULT_LIMIT);
        assert_eq!(page.tasks.len(), 2);
    }

    #[tokio::test]
    async fn test_stream_tasks_respects_concurrency_cap() {
        let mut repo = MockTaskRepository::new();
        repo.expect_count().returning(|| Ok(4));
        repo.expect_search_range()
            .times(4)
            .returning(|_, offset| Ok(vec![task(i64::from(offset) + 1)]));

        let service = TaskService::new(repo).with_max_concurrency(Some(2));
        let pages: Vec<_> = service.stream_tasks(Window::new(1, 0, 50)).collect().await;

        assert_eq!(pages.len(), 4);
        assert!(pages.iter().all(|p| p.is_ok()));
    }

    #[tokio::test]
    async fn test_stream_tasks_ends_with_error() {
        let mut repo = MockTaskRepository::new();
        repo.expect_count().returning(|| Ok(3));
        repo.expect_search_range().returning(|_, offset| {
            if offset == 0 {
                Ok(vec![task(1)])
            } else {
                Err(TaskError::Database("disk I/O error".into()))
            }
        });

        let service = TaskService::new(repo);
        let items: Vec<_> = service.stream_tasks(Window::new(1, 0, 1)).collect().await;

        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(matches!(items[1], Err(TaskError::Stream(_))));
    }
}
