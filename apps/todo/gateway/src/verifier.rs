use async_trait::async_trait;
use grpc_client::TokenVerifier;
use rpc::auth::v1::{CheckTokenRequest, auth_service_client::AuthServiceClient};
use tonic::Status;
use tonic::transport::Channel;

/// Verifies tokens by calling `CheckToken` on the auth service.
#[derive(Clone)]
pub struct GrpcTokenVerifier {
    client: AuthServiceClient<Channel>,
}

impl GrpcTokenVerifier {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: AuthServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl TokenVerifier for GrpcTokenVerifier {
    async fn verify(&self, token: &str) -> Result<bool, Status> {
        let mut client = self.client.clone();

        let response = client
            .check_token(CheckTokenRequest {
                token: token.to_string(),
            })
            .await?;

        Ok(response.into_inner().success)
    }
}
