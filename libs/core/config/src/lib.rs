pub mod tracing;

use std::env;

/// Deployment environment, selected through `APP_ENV`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        match env::var("APP_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Filter directives used when `RUST_LOG` is not set.
    pub fn default_log_directives(&self) -> &'static str {
        match self {
            Environment::Production => "info,h2=warn,hyper=warn,tower=warn,sqlx=warn",
            Environment::Development => {
                "debug,h2=info,hyper=info,hyper_util=info,tower=info,sqlx=warn"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        for value in ["production", "PRODUCTION", "Production"] {
            temp_env::with_var("APP_ENV", Some(value), || {
                assert_eq!(Environment::from_env(), Environment::Production);
            });
        }
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_production_directives_are_quieter() {
        assert!(Environment::Production.default_log_directives().starts_with("info"));
        assert!(Environment::Development.default_log_directives().starts_with("debug"));
    }
}
