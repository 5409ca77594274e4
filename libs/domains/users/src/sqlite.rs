use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    entity,
    error::UserResult,
    models::{NewUser, User},
    repository::UserRepository,
};

pub const CREATE_USER_TABLE: &str = "CREATE TABLE IF NOT EXISTS user (
    id INTEGER PRIMARY KEY,
    login VARCHAR(255) NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
)";

pub struct SqliteUserRepository {
    db: DatabaseConnection,
}

impl SqliteUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, user: NewUser) -> UserResult<i64> {
        let active_model: entity::ActiveModel = user.into();
        let id = entity::Entity::insert(active_model)
            .exec(&self.db)
            .await?
            .last_insert_id;

        tracing::info!(user_id = id, "Created user");
        Ok(id)
    }

    async fn find_by_login(&self, login: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Login.eq(login))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }
}
