use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use domain_users::TokenConfig;

/// Auth service configuration. Every flag falls back to an environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-auth")]
#[command(about = "gRPC server for auth.v1.AuthService")]
pub struct Config {
    /// gRPC listen address
    #[arg(long, env = "AUTH_GRPC_ADDR", default_value = "[::1]:12000")]
    pub addr: SocketAddr,

    /// SQLite database file, created when missing
    #[arg(long, env = "AUTH_DB_FILE", default_value = "users.db")]
    pub db_file: PathBuf,

    /// Token signing secret, generated on first start
    #[arg(long, env = "JWT_SECRET_FILE", default_value = "secret.dat")]
    pub jwt_secret_file: PathBuf,

    /// Token lifetime in seconds. Tokens never expire when unset.
    #[arg(long, env = "TOKEN_TTL_SECS")]
    pub token_ttl_secs: Option<u64>,
}

impl Config {
    pub fn token_config(&self) -> TokenConfig {
        TokenConfig {
            ttl: self.token_ttl_secs.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let vars = ["AUTH_GRPC_ADDR", "AUTH_DB_FILE", "JWT_SECRET_FILE", "TOKEN_TTL_SECS"];
        temp_env::with_vars_unset(vars, || {
            let config = Config::try_parse_from(["todo-auth"]).unwrap();

            assert_eq!(config.addr, "[::1]:12000".parse().unwrap());
            assert_eq!(config.db_file, PathBuf::from("users.db"));
            assert_eq!(config.jwt_secret_file, PathBuf::from("secret.dat"));
            assert!(config.token_config().ttl.is_none());
        });
    }

    #[test]
    fn test_env_fallback() {
        temp_env::with_vars(
            [("AUTH_GRPC_ADDR", Some("127.0.0.1:7000")), ("TOKEN_TTL_SECS", Some("60"))],
            || {
                let config = Config::try_parse_from(["todo-auth"]).unwrap();

                assert_eq!(config.addr.port(), 7000);
                assert_eq!(config.token_config().ttl, Some(Duration::from_secs(60)));
            },
        );
    }
}
