//! # gRPC plumbing shared by the todo services
//!
//! - **Channels**: HTTP/2-tuned lazy client channels
//! - **Authorization gate**: a tower layer that verifies the bearer token of
//!   every outbound call before it reaches the wrapped service
//! - **Request ids**: `x-request-id` propagation for log correlation
//! - **Server helpers**: shared server configuration, health reporting
//!
//! ## Guarding a client
//! ```ignore
//! use grpc_client::{AuthorizeLayer, create_channel_lazy};
//! use rpc::todo::v1::todo_service_client::TodoServiceClient;
//! use tower::ServiceBuilder;
//!
//! let channel = create_channel_lazy("http://[::1]:13000")?;
//! let guarded = ServiceBuilder::new()
//!     .layer(AuthorizeLayer::new(verifier))
//!     .service(channel);
//! let client = TodoServiceClient::new(guarded);
//! ```

pub mod channel;
pub mod error;
pub mod interceptors;
pub mod server;

pub use channel::{ChannelConfig, create_channel_lazy, create_channel_lazy_with_config};
pub use error::{GrpcError, GrpcResult, ToTonicOption};
pub use interceptors::{AuthorizeLayer, AuthorizeService, RequestIdInterceptor, TokenVerifier};
