//! gRPC server helpers.
//!
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig};
//! use rpc::todo::v1::todo_service_server::{TodoServiceServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::new(addr);
//! let (health_reporter, health_service) = create_health_service();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(TodoServiceServer::new(my_impl).accept_compressed(CompressionEncoding::Zstd))
//!     .serve_with_shutdown(config.addr, shutdown_signal())
//!     .await?;
//! ```

mod builder;
mod config;

pub use builder::{GrpcServer, create_health_service};
pub use config::ServerConfig;
