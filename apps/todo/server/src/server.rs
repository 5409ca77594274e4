//! gRPC server initialization and lifecycle management
//!
//! - Tracing initialization
//! - Database connection and schema bootstrap
//! - Service creation
//! - gRPC server configuration and startup
//! - Health check service (grpc.health.v1.Health)

use core_config::Environment;
use database::sqlite::{self, SqliteConfig};
use domain_tasks::{CREATE_TASK_TABLE, SqliteTaskRepository, TaskRepository, TaskService};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig, create_health_service};
use rpc::todo::v1::todo_service_server::{SERVICE_NAME, TodoServiceServer};
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tracing::info;

use crate::config::Config;
use crate::service::TodoServiceImpl;

/// Run the gRPC server until SIGINT/SIGTERM.
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened or its schema created
/// - Server binding fails
/// - Server runtime encounters an error
pub async fn run(config: Config) -> Result<()> {
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment, "todo-server");

    info!(db_file = %config.db_file.display(), "Opening task database");
    let db = sqlite::connect(SqliteConfig::for_file(&config.db_file))
        .await
        .wrap_err("Failed to open task database")?;
    sqlite::bootstrap(&db, &[CREATE_TASK_TABLE])
        .await
        .wrap_err("Failed to create task table")?;
    sqlite::check_health(&db).await.wrap_err("Task database is not responding")?;

    let service = TaskService::new(SqliteTaskRepository::new(db))
        .with_max_concurrency(config.max_stream_concurrency);
    if config.max_stream_concurrency.is_none() {
        info!("Stream concurrency is unbounded");
    }

    let server_config = ServerConfig::new(config.addr);
    GrpcServer::log_startup(&server_config, SERVICE_NAME);

    let (health_reporter, health_service) = create_health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;

    Server::builder()
        .add_service(health_service)
        .add_service(todo_server(service, &server_config))
        .serve_with_shutdown(server_config.addr, axum_helpers::shutdown_signal())
        .await
        .wrap_err("gRPC server failed")?;

    info!("TodoService stopped");
    Ok(())
}

/// Wrap a task service in the generated server with the configured limits
pub fn todo_server<R>(
    service: TaskService<R>,
    config: &ServerConfig,
) -> TodoServiceServer<TodoServiceImpl<R>>
where
    R: TaskRepository + 'static,
{
    let server = TodoServiceServer::new(TodoServiceImpl::new(service))
        .max_decoding_message_size(config.max_decoding_message_size)
        .max_encoding_message_size(config.max_encoding_message_size);

    if config.enable_compression {
        server
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd)
    } else {
        server
    }
}
