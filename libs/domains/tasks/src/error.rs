use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task not found")]
    NotFound(i64),

    /// Constraint violation on write
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    /// A pagination worker failed; the export stream is aborted
    #[error("Stream error: {0}")]
    Stream(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Persistence failures stay coarse (`UNKNOWN`) except a missing row.
impl From<TaskError> for tonic::Status {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(_) => tonic::Status::not_found(err.to_string()),
            TaskError::Conflict(_) | TaskError::Database(_) => {
                tonic::Status::unknown(err.to_string())
            }
            TaskError::Stream(_) => tonic::Status::internal(err.to_string()),
        }
    }
}

impl From<sea_orm::DbErr> for TaskError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => TaskError::Conflict(detail),
            _ => TaskError::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (TaskError::NotFound(7), Code::NotFound),
            (TaskError::Conflict("task.id".into()), Code::Unknown),
            (TaskError::Database("disk I/O error".into()), Code::Unknown),
            (TaskError::Stream("worker failed".into()), Code::Internal),
        ];
        for (err, code) in cases {
            assert_eq!(tonic::Status::from(err).code(), code);
        }
    }

    #[test]
    fn test_not_found_message() {
        let status = tonic::Status::from(TaskError::NotFound(1));
        assert_eq!(status.message(), "task not found");
    }
}
