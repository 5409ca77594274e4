use super::config::ServerConfig;
use tracing::info;

/// Startup logging and health reporting for gRPC servers.
pub struct GrpcServer;

impl GrpcServer {
    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        info!(
            addr = %config.addr,
            service = service_name,
            compression = config.enable_compression,
            "gRPC server starting"
        );
    }

    /// Mark `service_name` and the empty service name as serving.
    ///
    /// The empty name answers generic health checks.
    pub async fn setup_health(
        health_reporter: &tonic_health::server::HealthReporter,
        service_name: &str,
    ) {
        health_reporter
            .set_service_status(service_name, tonic_health::ServingStatus::Serving)
            .await;
        health_reporter
            .set_service_status("", tonic_health::ServingStatus::Serving)
            .await;

        info!(service = service_name, "Service marked as serving");
    }
}

pub use tonic_health::server::health_reporter as create_health_service;
