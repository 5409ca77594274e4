use grpc_client::{AuthorizeLayer, AuthorizeService, RequestIdInterceptor};
use rpc::auth::v1::auth_service_client::AuthServiceClient;
use rpc::todo::v1::todo_service_client::TodoServiceClient;
use tonic::codec::CompressionEncoding;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Channel;
use tower::Layer;

use crate::verifier::GrpcTokenVerifier;

type TracedChannel = InterceptedService<Channel, RequestIdInterceptor>;

pub type AuthClient = AuthServiceClient<TracedChannel>;

/// Every call on this client passes the authorization gate first.
pub type TodoClient = TodoServiceClient<AuthorizeService<TracedChannel>>;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthClient,
    pub todo: TodoClient,
}

impl AppState {
    /// Build clients over existing channels. Tokens are checked against the
    /// auth service behind `auth_channel`.
    pub fn new(auth_channel: Channel, todo_channel: Channel) -> Self {
        let verifier = GrpcTokenVerifier::new(auth_channel.clone());

        let auth = AuthServiceClient::with_interceptor(auth_channel, RequestIdInterceptor::new())
            .send_compressed(CompressionEncoding::Zstd)
            .accept_compressed(CompressionEncoding::Zstd);

        let guarded = AuthorizeLayer::new(verifier)
            .layer(InterceptedService::new(todo_channel, RequestIdInterceptor::new()));
        let todo = TodoServiceClient::new(guarded)
            .send_compressed(CompressionEncoding::Zstd)
            .accept_compressed(CompressionEncoding::Zstd);

        Self { auth, todo }
    }
}
