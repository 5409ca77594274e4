use thiserror::Error;

use crate::token::TokenError;

#[derive(Debug, Error)]
pub enum UserError {
    /// Unknown login or wrong password. The two are not told apart.
    #[error("user not found")]
    NotFound,

    #[error("login already taken: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for tonic::Status {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => tonic::Status::not_found(err.to_string()),
            UserError::Token(token) => token.into(),
            UserError::PasswordHash(ref msg) => {
                tracing::error!("Password hash error: {}", msg);
                tonic::Status::unknown(err.to_string())
            }
            UserError::Conflict(_) | UserError::Database(_) => {
                tonic::Status::unknown(err.to_string())
            }
        }
    }
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => UserError::Conflict(detail),
            _ => UserError::Database(err.to_string()),
        }
    }
}
