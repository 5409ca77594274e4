//! Server infrastructure module.
//!
//! - Router defaults (tracing, CORS, 404 fallback)
//! - `/health` liveness endpoint
//! - Graceful shutdown on SIGINT/SIGTERM

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
