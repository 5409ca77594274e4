use core_config::Environment;
use eyre::{Result, WrapErr};
use grpc_client::create_channel_lazy_with_config;
use tracing::info;

use crate::config::Config;
use crate::routes::router;
use crate::state::AppState;

/// Serve the HTTP gateway until SIGINT/SIGTERM.
///
/// Backend channels are lazy, so the gateway starts even if the auth or todo
/// service is not up yet; calls made meanwhile fail with 503.
pub async fn run(config: Config) -> Result<()> {
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment, "todo-gateway");

    let auth_channel =
        create_channel_lazy_with_config(config.grpc_addr_auth.clone(), config.channel_config())
            .wrap_err("Invalid auth service address")?;
    let todo_channel =
        create_channel_lazy_with_config(config.grpc_addr_todo.clone(), config.channel_config())
            .wrap_err("Invalid todo service address")?;

    info!(
        auth = %config.grpc_addr_auth,
        todo = %config.grpc_addr_todo,
        http = %config.http_addr,
        call_timeout_secs = ?config.grpc_timeout_secs,
        "Starting gateway"
    );

    let app = router(AppState::new(auth_channel, todo_channel));
    axum_helpers::create_app(app, config.http_addr)
        .await
        .wrap_err("HTTP server failed")?;

    info!("Gateway stopped");
    Ok(())
}
