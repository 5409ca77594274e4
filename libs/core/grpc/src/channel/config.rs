use std::time::Duration;
use tonic::transport::Endpoint;

/// HTTP/2 and TCP settings for client channels
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    // HTTP/2 Keep-Alive
    pub http2_keep_alive_interval: Option<Duration>,
    pub keep_alive_timeout: Duration,
    pub keep_alive_while_idle: bool,

    pub connect_timeout: Duration,
    /// Per-call deadline. `None` leaves deadlines to the caller, which long
    /// export streams depend on.
    pub timeout: Option<Duration>,

    // Window sizes (HTTP/2 flow control)
    pub initial_connection_window_size: Option<u32>,
    pub initial_stream_window_size: Option<u32>,
    pub http2_adaptive_window: bool,

    // TCP settings
    pub tcp_nodelay: bool,
    pub tcp_keepalive: Option<Duration>,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            http2_keep_alive_interval: Some(Duration::from_secs(30)),
            keep_alive_timeout: Duration::from_secs(10),
            keep_alive_while_idle: true,
            connect_timeout: Duration::from_secs(5),
            timeout: None,
            initial_connection_window_size: Some(1024 * 1024), // 1MB
            initial_stream_window_size: Some(1024 * 1024),     // 1MB
            http2_adaptive_window: true,
            tcp_nodelay: true,
            tcp_keepalive: Some(Duration::from_secs(30)),
        }
    }
}

impl ChannelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set a deadline applied to every call made over the channel
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn apply_to_endpoint(self, mut endpoint: Endpoint) -> Endpoint {
        if let Some(interval) = self.http2_keep_alive_interval {
            endpoint = endpoint.http2_keep_alive_interval(interval);
        }
        endpoint = endpoint
            .keep_alive_timeout(self.keep_alive_timeout)
            .keep_alive_while_idle(self.keep_alive_while_idle)
            .connect_timeout(self.connect_timeout);

        if let Some(timeout) = self.timeout {
            endpoint = endpoint.timeout(timeout);
        }

        if let Some(size) = self.initial_connection_window_size {
            endpoint = endpoint.initial_connection_window_size(size);
        }
        if let Some(size) = self.initial_stream_window_size {
            endpoint = endpoint.initial_stream_window_size(size);
        }
        endpoint = endpoint.http2_adaptive_window(self.http2_adaptive_window);

        endpoint = endpoint.tcp_nodelay(self.tcp_nodelay);
        if let Some(keepalive) = self.tcp_keepalive {
            endpoint = endpoint.tcp_keepalive(Some(keepalive));
        }

        endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_call_deadline() {
        let config = ChannelConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.timeout, None);
        assert!(config.tcp_nodelay);
        assert!(config.http2_adaptive_window);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ChannelConfig::new()
            .with_connect_timeout(Duration::from_secs(10))
            .with_request_timeout(Duration::from_secs(120));

        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.timeout, Some(Duration::from_secs(120)));
        assert_eq!(config.http2_keep_alive_interval, Some(Duration::from_secs(30)));
    }
}
