pub mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

/// Creates a lazy gRPC channel that connects on first request.
///
/// The gateway uses this so it can start before the services it fronts;
/// calls made while a backend is down fail with `UNAVAILABLE`.
pub fn create_channel_lazy(addr: impl Into<String>) -> GrpcResult<Channel> {
    create_channel_lazy_with_config(addr, ChannelConfig::default())
}

/// Creates a lazy gRPC channel with custom configuration
pub fn create_channel_lazy_with_config(
    addr: impl Into<String>,
    config: ChannelConfig,
) -> GrpcResult<Channel> {
    let addr = addr.into();
    let endpoint = endpoint(&addr, config)?;

    tracing::debug!(
        target: "grpc_client",
        addr = %addr,
        "Creating lazy gRPC channel (connects on first request)"
    );

    Ok(endpoint.connect_lazy())
}

fn endpoint(addr: &str, config: ChannelConfig) -> GrpcResult<Endpoint> {
    let endpoint = Endpoint::from_shared(addr.to_owned()).map_err(|e| {
        tracing::error!(target: "grpc_client", addr = %addr, error = ?e, "Invalid URI");
        GrpcError::InvalidUri(e)
    })?;
    Ok(config.apply_to_endpoint(endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lazy_channel_does_not_connect() {
        // Nothing listens here; a lazy channel must still be created.
        let result = create_channel_lazy("http://127.0.0.1:1");
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_lazy_channel_rejects_invalid_uri() {
        let result = create_channel_lazy("not a valid uri");
        assert!(matches!(result.unwrap_err(), GrpcError::InvalidUri(_)));
    }

    #[tokio::test]
    async fn test_lazy_channel_with_custom_timeouts() {
        let config = ChannelConfig::new()
            .with_connect_timeout(std::time::Duration::from_millis(250))
            .with_request_timeout(std::time::Duration::from_secs(30));

        let result = create_channel_lazy_with_config("http://127.0.0.1:1", config);
        assert!(result.is_ok());
    }
}
