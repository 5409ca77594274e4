use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use grpc_client::ChannelConfig;

/// Gateway configuration. Every flag falls back to an environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-gateway")]
#[command(about = "HTTP/JSON gateway for the auth and todo services")]
pub struct Config {
    /// Auth service endpoint
    #[arg(long, env = "GATEWAY_GRPC_ADDR_AUTH", default_value = "http://[::1]:12000")]
    pub grpc_addr_auth: String,

    /// Todo service endpoint
    #[arg(long, env = "GATEWAY_GRPC_ADDR_TODO", default_value = "http://[::1]:13000")]
    pub grpc_addr_todo: String,

    /// HTTP listen address
    #[arg(long, env = "GATEWAY_HTTP_ADDR", default_value = "0.0.0.0:8080")]
    pub http_addr: SocketAddr,

    /// Seconds allowed to establish a backend connection
    #[arg(long, env = "GATEWAY_GRPC_CONNECT_TIMEOUT_SECS", default_value_t = 5)]
    pub grpc_connect_timeout_secs: u64,

    /// Deadline in seconds for every backend call, export streams included.
    /// Unset leaves calls unbounded.
    #[arg(long, env = "GATEWAY_GRPC_TIMEOUT_SECS")]
    pub grpc_timeout_secs: Option<u64>,
}

impl Config {
    /// Channel settings for both backends
    pub fn channel_config(&self) -> ChannelConfig {
        let config = ChannelConfig::new()
            .with_connect_timeout(Duration::from_secs(self.grpc_connect_timeout_secs));
        match self.grpc_timeout_secs {
            Some(secs) => config.with_request_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}
