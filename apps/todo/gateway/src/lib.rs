//! HTTP/JSON gateway
//!
//! Translates REST calls into gRPC calls on the auth and todo services.
//!
//! ```text
//! HTTP client
//!   ↓ (JSON, Authorization header)
//! axum routes (routes/)
//!   ├─→ AuthServiceClient                       (unguarded)
//!   └─→ TodoServiceClient
//!         ↓ AuthorizeLayer → CheckToken on the auth service
//!         ↓ RequestIdInterceptor
//!         ↓ Channel
//! ```

pub mod config;
pub mod dto;
pub mod routes;
pub mod server;
pub mod state;
pub mod verifier;

pub use config::Config;
pub use routes::router;
pub use server::run;
pub use state::AppState;
pub use verifier::GrpcTokenVerifier;
