pub mod grpc;
pub mod handlers;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use grpc::{code_name, http_status};

/// Standard error response structure.
///
/// - `code`: numeric gRPC status code of the failure
/// - `error`: machine-readable identifier (e.g., "NOT_FOUND")
/// - `message`: human-readable message
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 5,
///   "error": "NOT_FOUND",
///   "message": "task not found"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: i32,
    pub error: String,
    pub message: String,
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// A failed upstream gRPC call
    #[error("{}: {}", code_name(.0.code()), .0.message())]
    Grpc(#[from] tonic::Status),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::QueryExtractorRejection(e) => e.status(),
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Grpc(status) => http_status(status.code()),
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body rendered for this error
    pub fn to_response_body(&self) -> ErrorResponse {
        let (code, message) = match self {
            AppError::JsonExtractorRejection(e) => (tonic::Code::InvalidArgument, e.body_text()),
            AppError::QueryExtractorRejection(e) => (tonic::Code::InvalidArgument, e.body_text()),
            AppError::BadRequest(msg) => (tonic::Code::InvalidArgument, msg.clone()),
            AppError::Grpc(status) => (status.code(), status.message().to_string()),
            AppError::InternalServerError(msg) => (tonic::Code::Internal, msg.clone()),
        };

        ErrorResponse {
            code: code as i32,
            error: code_name(code).to_string(),
            message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::info!(status = status.as_u16(), "{}", self);
        }

        (status, Json(self.to_response_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_grpc_error_renders_json() {
        let response = AppError::from(tonic::Status::not_found("task not found")).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            ErrorResponse {
                code: 5,
                error: "NOT_FOUND".into(),
                message: "task not found".into(),
            }
        );
    }

    #[test]
    fn test_bad_request() {
        let err = AppError::BadRequest("id must be an integer".into());

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_response_body().error, "INVALID_ARGUMENT");
    }
}
