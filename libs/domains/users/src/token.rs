//! Bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs over `{id, login}`. Validity is the signature alone
//! unless a TTL is configured, in which case an `exp` claim is embedded and an
//! expired token verifies as `false`.

use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::secret::JwtSecret;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("empty token")]
    EmptyToken,

    /// Bad signature, wrong algorithm or unparsable token
    #[error("token verification failed: {0}")]
    Verification(String),

    #[error("token signing failed: {0}")]
    Signing(String),
}

impl From<TokenError> for tonic::Status {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::EmptyToken => tonic::Status::invalid_argument(err.to_string()),
            TokenError::Verification(_) | TokenError::Signing(_) => {
                tonic::Status::unknown(err.to_string())
            }
        }
    }
}

/// JWT claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokenConfig {
    /// Lifetime of issued tokens. `None` issues tokens that never expire.
    pub ttl: Option<Duration>,
}

impl TokenConfig {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { ttl: Some(ttl) }
    }
}

#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    config: TokenConfig,
}

impl TokenService {
    pub fn new(secret: &JwtSecret, config: TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            config,
        }
    }

    /// Sign a token for the given account
    pub fn issue(&self, id: i64, login: &str) -> Result<String, TokenError> {
        let exp = self
            .config
            .ttl
            .map(|ttl| jsonwebtoken::get_current_timestamp().saturating_add(ttl.as_secs()));
        let claims = Claims {
            id,
            login: login.to_owned(),
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Check a token's signature and expiry.
    ///
    /// `Ok(false)` only for a correctly signed token that has expired.
    pub fn verify(&self, token: &str) -> Result<bool, TokenError> {
        if token.is_empty() {
            return Err(TokenError::EmptyToken);
        }

        match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(_) => Ok(true),
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => Ok(false),
            Err(e) => {
                tracing::debug!(error = %e, "Token rejected");
                Err(TokenError::Verification(e.to_string()))
            }
        }
    }

    /// Decode the claims of a valid token
    pub fn claims(&self, token: &str) -> Result<Claims, TokenError> {
        if token.is_empty() {
            return Err(TokenError::EmptyToken);
        }
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Verification(e.to_string()))
    }
}

/// In-process verification for services that hold the secret themselves.
#[async_trait]
impl grpc_client::TokenVerifier for TokenService {
    async fn verify(&self, token: &str) -> Result<bool, tonic::Status> {
        TokenService::verify(self, token).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::SECRET_LEN;

    fn service(config: TokenConfig) -> TokenService {
        TokenService::new(&JwtSecret::from_bytes([1; SECRET_LEN]), config)
    }

    #[test]
    fn test_issued_token_verifies() {
        let tokens = service(TokenConfig::default());

        let token = tokens.issue(1, "admin").unwrap();

        assert!(tokens.verify(&token).unwrap());
        assert_eq!(
            tokens.claims(&token).unwrap(),
            Claims {
                id: 1,
                login: "admin".into(),
                exp: None
            }
        );
    }

    #[test]
    fn test_issue_is_deterministic_without_ttl() {
        let tokens = service(TokenConfig::default());
        assert_eq!(tokens.issue(5, "bob").unwrap(), tokens.issue(5, "bob").unwrap());
    }

    #[test]
    fn test_empty_token_is_invalid_argument() {
        let err = service(TokenConfig::default()).verify("").unwrap_err();

        assert!(matches!(err, TokenError::EmptyToken));
        assert_eq!(tonic::Status::from(err).code(), tonic::Code::InvalidArgument);
    }

    #[test]
    fn test_tampered_token_fails_verification() {
        let tokens = service(TokenConfig::default());
        let token = format!("{}x", tokens.issue(1, "admin").unwrap());

        assert!(matches!(tokens.verify(&token), Err(TokenError::Verification(_))));
        assert!(matches!(tokens.verify("not-a-jwt"), Err(TokenError::Verification(_))));
    }

    #[test]
    fn test_foreign_secret_fails_verification() {
        let token = service(TokenConfig::default()).issue(1, "admin").unwrap();
        let other =
            TokenService::new(&JwtSecret::from_bytes([2; SECRET_LEN]), TokenConfig::default());

        assert!(matches!(other.verify(&token), Err(TokenError::Verification(_))));
    }

    #[test]
    fn test_other_algorithm_is_rejected() {
        let secret = [1; SECRET_LEN];
        let claims = Claims {
            id: 1,
            login: "admin".into(),
            exp: None,
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(&secret),
        )
        .unwrap();

        let tokens = service(TokenConfig::default());
        assert!(matches!(tokens.verify(&token), Err(TokenError::Verification(_))));
    }

    #[test]
    fn test_ttl_embeds_expiry() {
        let tokens = service(TokenConfig::with_ttl(Duration::from_secs(3600)));

        let token = tokens.issue(1, "admin").unwrap();

        assert!(tokens.verify(&token).unwrap());
        assert!(tokens.claims(&token).unwrap().exp.is_some());
    }

    #[test]
    fn test_expired_token_is_false() {
        let secret = [1; SECRET_LEN];
        let claims = Claims {
            id: 1,
            login: "admin".into(),
            exp: Some(jsonwebtoken::get_current_timestamp() - 60),
        };
        let key = EncodingKey::from_secret(&secret);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &key).unwrap();

        assert!(!service(TokenConfig::default()).verify(&token).unwrap());
    }

    #[tokio::test]
    async fn test_token_verifier_maps_errors_to_status() {
        use grpc_client::TokenVerifier;

        let tokens = service(TokenConfig::default());
        let token = tokens.issue(3, "carol").unwrap();

        assert!(TokenVerifier::verify(&tokens, &token).await.unwrap());
        let status = TokenVerifier::verify(&tokens, "").await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }
}
