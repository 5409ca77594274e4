//! # Axum Helpers
//!
//! Shared pieces for the HTTP gateway.
//!
//! ## Modules
//!
//! - **[`errors`]**: JSON error responses and the gRPC status → HTTP mapping
//! - **[`server`]**: router defaults, `/health`, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router, health_router};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let api_routes = Router::new(); // Add your routes
//!     let health = health_router("gateway", env!("CARGO_PKG_VERSION"));
//!     let router = create_router(api_routes).merge(health);
//!
//!     create_app(router, "0.0.0.0:8080".parse().unwrap()).await
//! }
//! ```

pub mod errors;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export server types
pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};
