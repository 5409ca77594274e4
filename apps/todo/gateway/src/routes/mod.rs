//! HTTP routes
//!
//! | Method | Path | gRPC call |
//! |---|---|---|
//! | POST | `/v1/auth/sign-up` | `SignUp` |
//! | POST | `/v1/auth/login` | `Login` |
//! | POST | `/v1/auth/check` | `CheckToken` |
//! | POST | `/v1/todo` | `CreateTask` |
//! | GET | `/v1/todo` | `ListTasks` |
//! | GET | `/v1/todo/stream` | `ListTasksStream` (NDJSON) |
//! | GET/PUT/DELETE | `/v1/todo/{id}` | `ReadTask` / `UpdateTask` / `DeleteTask` |
//! | GET | `/health` | |

pub mod auth;
pub mod todo;

use axum::Router;
use axum::routing::{get, post};
use axum_helpers::server::{create_router, health_router};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/v1/auth/sign-up", post(auth::sign_up))
        .route("/v1/auth/login", post(auth::login))
        .route("/v1/auth/check", post(auth::check_token))
        .route("/v1/todo", post(todo::create_task).get(todo::list_tasks))
        .route("/v1/todo/stream", get(todo::list_tasks_stream))
        .route(
            "/v1/todo/{id}",
            get(todo::read_task).put(todo::update_task).delete(todo::delete_task),
        )
        .with_state(state)
        .merge(health_router("todo-gateway", env!("CARGO_PKG_VERSION")));

    create_router(api)
}
