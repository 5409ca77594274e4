use std::sync::Arc;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::NewUser;
use crate::repository::UserRepository;
use crate::token::TokenService;

/// Service layer for accounts and their tokens
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    tokens: TokenService,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            tokens: self.tokens.clone(),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, tokens: TokenService) -> Self {
        Self {
            repository: Arc::new(repository),
            tokens,
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Register a login and return a token for it
    #[instrument(skip(self, password))]
    pub async fn sign_up(&self, login: &str, password: &str) -> UserResult<String> {
        let password_hash = self.hash_password(password)?;

        let id = self
            .repository
            .insert(NewUser {
                login: login.to_owned(),
                password_hash,
            })
            .await?;

        Ok(self.tokens.issue(id, login)?)
    }

    /// Exchange credentials for a token
    #[instrument(skip(self, password))]
    pub async fn login(&self, login: &str, password: &str) -> UserResult<String> {
        let user = self
            .repository
            .find_by_login(login)
            .await?
            .ok_or(UserError::NotFound)?;

        if !self.verify_password(password, &user.password_hash)? {
            tracing::debug!(user_id = user.id, "Wrong password");
            return Err(UserError::NotFound);
        }

        Ok(self.tokens.issue(user.id, &user.login)?)
    }

    /// Whether a token is valid
    pub async fn check_token(&self, token: &str) -> UserResult<bool> {
        Ok(self.tokens.verify(token)?)
    }

    // Password helpers

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
