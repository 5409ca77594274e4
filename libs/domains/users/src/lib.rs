//! Users Domain
//!
//! Accounts, password hashing and the bearer tokens handed out on sign-up and
//! login.
//!
//! # Features
//!
//! - Sign-up and login with Argon2 password hashes
//! - HS256 tokens carrying `{id, login}` and an optional expiry
//! - A 32-byte signing secret persisted to disk on first run
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← sign-up, login, token check, password hashing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌──────────────┐
//! │ Repository  │     │ TokenService │  ← issue / verify, secret file
//! └──────┬──────┘     └──────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     CREATE_USER_TABLE, JwtSecret, SqliteUserRepository, TokenConfig, TokenService, UserService,
//! };
//! use database::sqlite::{self, SqliteConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = sqlite::connect(SqliteConfig::for_file("users.db")).await?;
//! sqlite::bootstrap(&db, &[CREATE_USER_TABLE]).await?;
//!
//! let secret = JwtSecret::load_or_generate("secret.dat")?;
//! let tokens = TokenService::new(&secret, TokenConfig::default());
//! let service = UserService::new(SqliteUserRepository::new(db), tokens);
//!
//! let token = service.sign_up("admin", "qwerty").await?;
//! assert!(service.check_token(&token).await?);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod models;
pub mod repository;
pub mod secret;
pub mod service;
pub mod sqlite;
pub mod token;

pub use error::{UserError, UserResult};
pub use models::{NewUser, User};
pub use repository::UserRepository;
pub use secret::{JwtSecret, SECRET_LEN, SecretError};
pub use service::UserService;
pub use sqlite::{CREATE_USER_TABLE, SqliteUserRepository};
pub use token::{Claims, TokenConfig, TokenError, TokenService};
