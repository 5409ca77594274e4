use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::{NewUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user and return its id. A taken login fails with
    /// [`UserError::Conflict`](crate::UserError::Conflict).
    async fn insert(&self, user: NewUser) -> UserResult<i64>;

    /// Get a user by login
    async fn find_by_login(&self, login: &str) -> UserResult<Option<User>>;
}
