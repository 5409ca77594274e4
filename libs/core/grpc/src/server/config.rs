use std::net::SocketAddr;

/// Settings shared by the gRPC servers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Accept and send Zstd-compressed messages (default: true)
    pub enable_compression: bool,
    /// Maximum message size for decoding (default: 8MB)
    pub max_decoding_message_size: usize,
    /// Maximum message size for encoding (default: 8MB)
    pub max_encoding_message_size: usize,
}

impl ServerConfig {
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            enable_compression: true,
            max_decoding_message_size: 8 * 1024 * 1024,
            max_encoding_message_size: 8 * 1024 * 1024,
        }
    }
}
