//! gRPC server initialization and lifecycle management

use core_config::Environment;
use database::sqlite::{self, SqliteConfig};
use domain_users::{
    CREATE_USER_TABLE, JwtSecret, SqliteUserRepository, TokenService, UserRepository, UserService,
};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig, create_health_service};
use rpc::auth::v1::auth_service_server::{AuthServiceServer, SERVICE_NAME};
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tracing::info;

use crate::config::Config;
use crate::service::AuthServiceImpl;

/// Run the gRPC server until SIGINT/SIGTERM.
///
/// # Errors
///
/// Returns an error if:
/// - The secret file cannot be read or created
/// - The database cannot be opened or its schema created
/// - Server binding fails or the server fails while running
pub async fn run(config: Config) -> Result<()> {
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment, "todo-auth");

    let secret = JwtSecret::load_or_generate(&config.jwt_secret_file)
        .wrap_err("Failed to load token secret")?;
    let token_config = config.token_config();
    match token_config.ttl {
        Some(ttl) => info!(ttl_secs = ttl.as_secs(), "Issuing expiring tokens"),
        None => info!("Issuing tokens without expiry"),
    }

    info!(db_file = %config.db_file.display(), "Opening user database");
    let db = sqlite::connect(SqliteConfig::for_file(&config.db_file))
        .await
        .wrap_err("Failed to open user database")?;
    sqlite::bootstrap(&db, &[CREATE_USER_TABLE])
        .await
        .wrap_err("Failed to create user table")?;
    sqlite::check_health(&db).await.wrap_err("User database is not responding")?;

    let service = UserService::new(
        SqliteUserRepository::new(db),
        TokenService::new(&secret, token_config),
    );

    let server_config = ServerConfig::new(config.addr);
    GrpcServer::log_startup(&server_config, SERVICE_NAME);

    let (health_reporter, health_service) = create_health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;

    Server::builder()
        .add_service(health_service)
        .add_service(auth_server(service, &server_config))
        .serve_with_shutdown(server_config.addr, axum_helpers::shutdown_signal())
        .await
        .wrap_err("gRPC server failed")?;

    info!("AuthService stopped");
    Ok(())
}

/// Wrap a user service in the generated server with the configured limits
pub fn auth_server<R>(
    service: UserService<R>,
    config: &ServerConfig,
) -> AuthServiceServer<AuthServiceImpl<R>>
where
    R: UserRepository + 'static,
{
    let server = AuthServiceServer::new(AuthServiceImpl::new(service))
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
