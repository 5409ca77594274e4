/// Re-export tonic's Interceptor trait for convenience
pub use tonic::service::Interceptor;

pub mod authorize;
pub mod request_id;

pub use authorize::{AuthorizeLayer, AuthorizeService, TokenVerifier};
pub use request_id::RequestIdInterceptor;
