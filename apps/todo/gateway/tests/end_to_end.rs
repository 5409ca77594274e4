//! Full walk through the gateway with both gRPC services running in-process.

use std::net::SocketAddr;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use domain_tasks::{
    CREATE_TASK_TABLE, NewTask, SqliteTaskRepository, Task, TaskError, TaskRepository, TaskResult,
    TaskService,
};
use domain_users::{
    CREATE_USER_TABLE, JwtSecret, SqliteUserRepository, TokenConfig, TokenService, UserService,
};
use grpc_client::server::ServerConfig;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestDatabase};
use todo_gateway::{AppState, router};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tower::ServiceExt;

struct Harness {
    app: Router,
    // Dropping these would remove the databases under the running servers.
    _users: TestDatabase,
    _tasks: Option<TestDatabase>,
}

/// Three rows; every range query past the first row fails.
struct BrokenRangeRepository;

#[async_trait]
impl TaskRepository for BrokenRangeRepository {
    async fn count(&self) -> TaskResult<u32> {
        Ok(3)
    }

    async fn insert(&self, _input: NewTask) -> TaskResult<i64> {
        Err(TaskError::Database("read-only".into()))
    }

    async fn get_by_id(&self, _id: i64) -> TaskResult<Option<Task>> {
        Ok(None)
    }

    async fn update(&self, _task: Task) -> TaskResult<()> {
        Err(TaskError::Database("read-only".into()))
    }

    async fn delete(&self, _id: i64) -> TaskResult<()> {
        Err(TaskError::Database("read-only".into()))
    }

    async fn search_range(&self, _limit: u32, offset: u32) -> TaskResult<Vec<Task>> {
        if offset > 0 {
            return Err(TaskError::Database("disk I/O error".into()));
        }
        Ok(vec![Task {
            id: 1,
            status: false,
            description: "first".into(),
        }])
    }
}

async fn listener() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, addr)
}

async fn harness() -> Harness {
    let tasks = TestDatabase::pooled(&[CREATE_TASK_TABLE]).await;
    let repository = SqliteTaskRepository::new(tasks.connection());
    harness_with(repository, Some(tasks)).await
}

async fn harness_with<R>(repository: R, tasks: Option<TestDatabase>) -> Harness
where
    R: TaskRepository + 'static,
{
    let users = TestDatabase::new(&[CREATE_USER_TABLE]).await;
    let tokens = TokenService::new(&JwtSecret::generate(), TokenConfig::default());
    let user_service = UserService::new(SqliteUserRepository::new(users.connection()), tokens);
    let (auth_listener, auth_addr) = listener().await;
    let auth = todo_auth::auth_server(user_service, &ServerConfig::new(auth_addr));
    tokio::spawn(async move {
        Server::builder()
            .add_service(auth)
            .serve_with_incoming(TcpListenerStream::new(auth_listener))
            .await
            .unwrap();
    });

    let task_service = TaskService::new(repository);
    let (todo_listener, todo_addr) = listener().await;
    let todo = todo_server::todo_server(task_service, &ServerConfig::new(todo_addr));
    tokio::spawn(async move {
        Server::builder()
            .add_service(todo)
            .serve_with_incoming(TcpListenerStream::new(todo_listener))
            .await
            .unwrap();
    });

    let auth_channel = grpc_client::create_channel_lazy(format!("http://{auth_addr}")).unwrap();
    let todo_channel = grpc_client::create_channel_lazy(format!("http://{todo_addr}")).unwrap();

    Harness {
        app: router(AppState::new(auth_channel, todo_channel)),
        _users: users,
        _tasks: tasks,
    }
}

async fn sign_up(app: &Router, login: String) -> String {
    let (status, body) = call(
        app,
        Method::POST,
        "/v1/auth/sign-up",
        None,
        Some(json!({ "login": login, "pass": "pw" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    format!("Bearer {}", body["token"].as_str().unwrap())
}

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = call_raw(app, method, uri, token, body).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn call_raw(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, token);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_full_scenario() {
    let h = harness().await;
    let data = TestDataBuilder::from_test_name("test_full_scenario");
    let login = data.login("alice");
    let credentials = json!({ "login": login, "pass": "s3cret" });

    // Sign up, then sign up again with the same login
    let (status, body) = call(
        &h.app,
        Method::POST,
        "/v1/auth/sign-up",
        None,
        Some(credentials.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();
    assert!(!token.is_empty());

    let (status, body) = call(
        &h.app,
        Method::POST,
        "/v1/auth/sign-up",
        None,
        Some(credentials.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "UNKNOWN");

    // Login with good and bad passwords
    let (status, body) = call(
        &h.app,
        Method::POST,
        "/v1/auth/login",
        None,
        Some(credentials.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = call(
        &h.app,
        Method::POST,
        "/v1/auth/login",
        None,
        Some(json!({ "login": login, "pass": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "user not found");

    // Token check
    let (status, body) = call(
        &h.app,
        Method::POST,
        "/v1/auth/check",
        None,
        Some(json!({ "token": token })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    // Todo calls without credentials never reach the todo service
    let (status, body) = call(&h.app, Method::GET, "/v1/todo/1", None, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "empty auth header");

    let (status, _) = call(&h.app, Method::GET, "/v1/todo/1", Some("Bearer"), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Create, read, update, delete
    let auth = Some(token.as_str());
    let (status, body) = call(
        &h.app,
        Method::POST,
        "/v1/todo",
        auth,
        Some(json!({ "status": false, "description": data.description(1) })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["task"]["id"].as_i64().unwrap();
    assert!(id > 0);

    let (status, body) = call(&h.app, Method::GET, &format!("/v1/todo/{id}"), auth, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["description"], data.description(1));

    let (status, body) = call(
        &h.app,
        Method::PUT,
        &format!("/v1/todo/{id}"),
        auth,
        Some(json!({ "status": true, "description": "done" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["status"], true);
    assert_eq!(body["task"]["description"], "done");

    let (status, body) = call(&h.app, Method::DELETE, &format!("/v1/todo/{id}"), auth, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, body) = call(&h.app, Method::GET, &format!("/v1/todo/{id}"), auth, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_list_and_export() {
    let h = harness().await;
    let data = TestDataBuilder::from_test_name("test_list_and_export");

    let (_, body) = call(
        &h.app,
        Method::POST,
        "/v1/auth/sign-up",
        None,
        Some(json!({ "login": data.login("bob"), "pass": "pw" })),
    )
    .await;
    let token = format!("Bearer {}", body["token"].as_str().unwrap());
    let auth = Some(token.as_str());

    for n in 1..=3 {
        let (status, _) = call(
            &h.app,
            Method::POST,
            "/v1/todo",
            auth,
            Some(json!({ "description": data.description(n) })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = call(&h.app, Method::GET, "/v1/todo?limit=2&offset=1", auth, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["tasks"].as_array().unwrap().len(), 2);
    assert_eq!(body["tasks"][0]["description"], data.description(2));

    let (status, bytes) = call_raw(
        &h.app,
        Method::GET,
        "/v1/todo/stream?limit=1&concurrency=2",
        auth,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let text = String::from_utf8(bytes).unwrap();
    let mut offsets: Vec<u64> = text
        .lines()
        .map(|line| {
            let line: Value = serde_json::from_str(line).unwrap();
            assert_eq!(line["result"]["total"], 3);
            assert_eq!(line["result"]["tasks"].as_array().unwrap().len(), 1);
            line["result"]["offset"].as_u64().unwrap()
        })
        .collect();
    offsets.sort_unstable();
    assert_eq!(offsets, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let h = harness().await;

    let (status, body) =
        call(&h.app, Method::GET, "/v1/todo?limit=1", Some("not-a-jwt"), None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().starts_with("token check"));
}

#[tokio::test]
async fn test_health_and_fallback() {
    let h = harness().await;

    let (status, body) = call(&h.app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, _) = call(&h.app, Method::GET, "/nope", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let h = harness().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = h.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_export_failure_ends_with_error_line() {
    let h = harness_with(BrokenRangeRepository, None).await;
    let token = sign_up(&h.app, "exporter".to_string()).await;

    let (status, bytes) = call_raw(
        &h.app,
        Method::GET,
        "/v1/todo/stream?limit=1&concurrency=1",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

    assert_eq!(lines.len(), 2, "{text}");
    assert_eq!(lines[0]["result"]["offset"], 0);
    assert_eq!(lines[0]["result"]["tasks"][0]["id"], 1);

    let last = lines.last().unwrap();
    assert_eq!(last["error"]["code"], 13);
    assert_eq!(last["error"]["error"], "INTERNAL");
    assert!(last["error"]["message"].as_str().unwrap().contains("disk I/O error"));
}

#[tokio::test]
async fn test_export_requires_credentials() {
    let h = harness().await;

    let (status, body) = call(&h.app, Method::GET, "/v1/todo/stream?limit=1", None, None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 7);
    assert_eq!(body["error"], "PERMISSION_DENIED");
    assert_eq!(body["message"], "empty auth header");
}
