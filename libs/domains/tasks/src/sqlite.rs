use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    entity,
    error::TaskResult,
    models::{NewTask, Task},
    repository::TaskRepository,
};

pub const CREATE_TASK_TABLE: &str = "CREATE TABLE IF NOT EXISTS task (
    id INTEGER PRIMARY KEY,
    status INTEGER NOT NULL DEFAULT 0,
    description TEXT NOT NULL DEFAULT ''
)";

pub struct SqliteTaskRepository {
    db: DatabaseConnection,
}

impl SqliteTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn count(&self) -> TaskResult<u32> {
        let count = entity::Entity::find().count(&self.db).await?;
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    async fn insert(&self, input: NewTask) -> TaskResult<i64> {
        let active_model: entity::ActiveModel = input.into();
        let id = entity::Entity::insert(active_model)
            .exec(&self.db)
            .await?
            .last_insert_id;

        tracing::info!(task_id = id, "Created task");
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, task: Task) -> TaskResult<()> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::Status, Expr::value(task.status))
            .col_expr(entity::Column::Description, Expr::value(task.description))
            .filter(entity::Column::Id.eq(task.id))
            .exec(&self.db)
            .await?;

        tracing::info!(task_id = task.id, rows = result.rows_affected, "Updated task");
        Ok(())
    }

    async fn delete(&self, id: i64) -> TaskResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        tracing::info!(task_id = id, rows = result.rows_affected, "Deleted task");
        Ok(())
    }

    async fn search_range(&self, limit: u32, offset: u32) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .limit(u64::from(limit))
            .offset(u64::from(offset))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
