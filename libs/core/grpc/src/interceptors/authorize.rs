//! Bearer-token gate for outbound gRPC calls.
//!
//! tonic's [`Interceptor`](tonic::service::Interceptor) is synchronous, so the
//! gate is a tower [`Layer`] instead. Every request walks
//! `received -> header-checked -> token-extracted -> verified -> forwarded`
//! and can short-circuit to a rejection at each step:
//!
//! | Condition                          | Status                                |
//! |------------------------------------|---------------------------------------|
//! | no `authorization` header          | `PERMISSION_DENIED` "empty auth header" |
//! | header present, token empty        | `PERMISSION_DENIED` "empty token"     |
//! | verifier failed                    | `UNKNOWN` "token check: ..."          |
//! | verifier answered `false`          | `PERMISSION_DENIED` "invalid token"   |
//!
//! Verification runs on its own task: a caller that drops the request does not
//! cancel a check already in flight, and the caller's deadline only applies to
//! the forwarded call. Failed checks are never retried.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use http::header::AUTHORIZATION;
use tonic::Status;
use tower::{Layer, Service};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Capability to check a bearer token.
///
/// `Ok(false)` means the token was understood and rejected. `Err` means the
/// check itself could not be completed.
#[async_trait]
pub trait TokenVerifier: Send + Sync + 'static {
    async fn verify(&self, token: &str) -> Result<bool, Status>;
}

/// Wraps a service so every call is authorized first.
#[derive(Clone)]
pub struct AuthorizeLayer {
    verifier: Arc<dyn TokenVerifier>,
}

impl AuthorizeLayer {
    pub fn new(verifier: impl TokenVerifier) -> Self {
        Self {
            verifier: Arc::new(verifier),
        }
    }
}

impl<S> Layer<S> for AuthorizeLayer {
    type Service = AuthorizeService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthorizeService {
            inner,
            verifier: Arc::clone(&self.verifier),
        }
    }
}

#[derive(Clone)]
pub struct AuthorizeService<S> {
    inner: S,
    verifier: Arc<dyn TokenVerifier>,
}

impl<S, ReqBody, ResBody> Service<http::Request<ReqBody>> for AuthorizeService<S>
where
    S: Service<http::Request<ReqBody>, Response = http::Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Into<BoxError>,
    ReqBody: Send + 'static,
{
    type Response = S::Response;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, req: http::Request<ReqBody>) -> Self::Future {
        // The clone may not be ready; keep the instance poll_ready was called on.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            let token = bearer_token(req.headers())?;
            check_detached(verifier, token).await?;
            inner.call(req).await.map_err(Into::into)
        })
    }
}

/// Extracts the token from the `authorization` header.
///
/// Both a raw token and `Bearer <token>` are accepted.
pub fn bearer_token(headers: &http::HeaderMap) -> Result<String, Status> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| reject("empty auth header"))?
        .to_str()
        .map_err(|_| reject("malformed auth header"))?
        .trim();

    let token = match value.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        None if value.eq_ignore_ascii_case("bearer") => "",
        _ => value,
    };

    if token.is_empty() {
        return Err(reject("empty token"));
    }
    Ok(token.to_owned())
}

async fn check_detached(verifier: Arc<dyn TokenVerifier>, token: String) -> Result<(), Status> {
    let outcome = tokio::spawn(async move { verifier.verify(&token).await })
        .await
        .map_err(|e| Status::unknown(format!("token check: {e}")))?;

    match outcome {
        Ok(true) => Ok(()),
        Ok(false) => Err(reject("invalid token")),
        Err(status) => {
            tracing::warn!(code = ?status.code(), error = %status.message(), "token check failed");
            Err(Status::unknown(format!("token check: {}", status.message())))
        }
    }
}

fn reject(reason: &'static str) -> Status {
    tracing::debug!(reason, "request rejected by authorization gate");
    Status::permission_denied(reason)
}
