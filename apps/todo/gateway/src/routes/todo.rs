use std::convert::Infallible;

use axum::{
    Json,
    body::Body,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use futures::{StreamExt, future};
use rpc::todo::v1::{
    CreateTaskRequest, DeleteTaskRequest, ListTasksRequest, ListTasksStreamRequest, ReadTaskRequest,
    UpdateTaskRequest,
};
use tonic::metadata::AsciiMetadataValue;

use crate::dto::{ListQuery, PageBody, StreamLine, StreamQuery, SuccessBody, TaskBody, TaskInput};
use crate::state::AppState;

pub const NDJSON: &str = "application/x-ndjson";

/// Copy the caller's `Authorization` header onto the outgoing call.
///
/// A missing header is left for the authorization gate to reject.
fn authorized<T>(headers: &HeaderMap, message: T) -> Result<tonic::Request<T>, AppError> {
    let mut request = tonic::Request::new(message);

    if let Some(value) = headers.get(header::AUTHORIZATION) {
        let value = value
            .to_str()
            .ok()
            .and_then(|v| AsciiMetadataValue::try_from(v).ok())
            .ok_or_else(|| AppError::BadRequest("malformed authorization header".to_string()))?;
        request.metadata_mut().insert("authorization", value);
    }

    Ok(request)
}

pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<TaskInput>, JsonRejection>,
) -> Result<Json<TaskBody>, AppError> {
    let Json(input) = body?;
    let mut client = state.todo.clone();

    let request = authorized(
        &headers,
        CreateTaskRequest {
            task: Some(input.into_task(0)),
        },
    )?;
    let response = client.create_task(request).await?;

    Ok(Json(response.into_inner().task.into()))
}

pub async fn read_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<TaskBody>, AppError> {
    let mut client = state.todo.clone();

    let response = client
        .read_task(authorized(&headers, ReadTaskRequest { id })?)
        .await?;

    Ok(Json(response.into_inner().task.into()))
}

pub async fn update_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    body: Result<Json<TaskInput>, JsonRejection>,
) -> Result<Json<TaskBody>, AppError> {
    let Json(input) = body?;
    let mut client = state.todo.clone();

    let request = authorized(
        &headers,
        UpdateTaskRequest {
            task: Some(input.into_task(id)),
        },
    )?;
    let response = client.update_task(request).await?;

    Ok(Json(response.into_inner().task.into()))
}

pub async fn delete_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<SuccessBody>, AppError> {
    let mut client = state.todo.clone();

    let response = client
        .delete_task(authorized(&headers, DeleteTaskRequest { id })?)
        .await?;

    Ok(Json(SuccessBody {
        success: response.into_inner().success,
    }))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<PageBody>, AppError> {
    let Query(query) = query?;
    let mut client = state.todo.clone();

    let request = authorized(
        &headers,
        ListTasksRequest {
            limit: query.limit,
            offset: query.offset,
        },
    )?;
    let response = client.list_tasks(request).await?;

    Ok(Json(response.into_inner().into()))
}

/// Export as newline-delimited JSON: one `{"result": page}` per line and a
/// final `{"error": ...}` line if the stream fails midway.
pub async fn list_tasks_stream(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<StreamQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let mut client = state.todo.clone();

    let request = authorized(
        &headers,
        ListTasksStreamRequest {
            limit: query.limit,
            offset: query.offset,
            concurrency: query.concurrency,
        },
    )?;
    let pages = client.list_tasks_stream(request).await?.into_inner();

    let lines = pages.scan(false, |failed, item| {
        if *failed {
            return future::ready(None);
        }
        let line = match item {
            Ok(page) => StreamLine::Result(page.into()),
            Err(status) => {
                *failed = true;
                tracing::warn!(
                    code = ?status.code(),
                    error = %status.message(),
                    "Task export failed midway"
                );
                StreamLine::Error(AppError::from(status).to_response_body())
            }
        };
        future::ready(Some(Ok::<_, Infallible>(ndjson(&line))))
    });

    Ok((
        [(header::CONTENT_TYPE, HeaderValue::from_static(NDJSON))],
        Body::from_stream(lines),
    )
        .into_response())
}

fn ndjson(line: &StreamLine) -> String {
    let mut encoded = serde_json::to_string(line).unwrap_or_else(|e| {
        format!(r#"{{"error":{{"code":13,"error":"INTERNAL","message":"encode page: {e}"}}}}"#)
    });
    encoded.push('\n');
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header_is_forwarded() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));

        let request = authorized(&headers, ()).unwrap();

        assert_eq!(request.metadata().get("authorization").unwrap(), "Bearer abc");
    }

    #[test]
    fn test_missing_header_is_left_to_the_gate() {
        let request = authorized(&HeaderMap::new(), ()).unwrap();

        assert!(request.metadata().get("authorization").is_none());
    }

    #[test]
    fn test_non_ascii_header_is_bad_request() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_bytes(b"tok\xffen").unwrap());

        let err = authorized(&headers, ()).unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_ndjson_lines_end_with_newline() {
        let line = ndjson(&StreamLine::Result(PageBody {
            tasks: vec![],
            total: 0,
            limit: 1,
            offset: 0,
        }));

        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
    }
}
