//! Auth gRPC Service
//!
//! Serves `auth.v1.AuthService`: sign-up, login and token checks. Its own
//! endpoints are never behind the authorization gate.
//!
//! ## Modules
//!
//! - `config`: command line / environment configuration
//! - `server`: Server initialization and lifecycle
//! - `service`: gRPC service implementation (AuthServiceImpl)

pub mod config;
pub mod server;
pub mod service;

pub use config::Config;
pub use server::{auth_server, run};
pub use service::AuthServiceImpl;
