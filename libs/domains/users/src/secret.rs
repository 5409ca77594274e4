//! Token signing secret persisted next to the service.

use std::fs;
use std::io;
use std::path::Path;

use argon2::password_hash::rand_core::{OsRng, RngCore};
use thiserror::Error;

pub const SECRET_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("cant access secret file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("secret file {path} holds {len} bytes, expected {}", SECRET_LEN)]
    TooShort { path: String, len: usize },
}

/// Symmetric key for signing tokens. Read once at startup and never rotated.
#[derive(Clone)]
pub struct JwtSecret([u8; SECRET_LEN]);

impl JwtSecret {
    pub fn from_bytes(bytes: [u8; SECRET_LEN]) -> Self {
        Self(bytes)
    }

    /// Fresh random secret
    pub fn generate() -> Self {
        let mut bytes = [0u8; SECRET_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Read the secret at `path`, creating it when the file is missing or empty.
    ///
    /// Only the first [`SECRET_LEN`] bytes of an existing file are used.
    pub fn load_or_generate(path: impl AsRef<Path>) -> Result<Self, SecretError> {
        let path = path.as_ref();
        let io_err = |source| SecretError::Io {
            path: path.display().to_string(),
            source,
        };

        let existing = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(io_err(e)),
        };

        if existing.is_empty() {
            let secret = Self::generate();
            fs::write(path, secret.0).map_err(io_err)?;
            tracing::info!(path = %path.display(), "Generated new token secret");
            return Ok(secret);
        }

        let bytes: [u8; SECRET_LEN] = existing
            .get(..SECRET_LEN)
            .and_then(|head| head.try_into().ok())
            .ok_or_else(|| SecretError::TooShort {
                path: path.display().to_string(),
                len: existing.len(),
            })?;

        tracing::debug!(path = %path.display(), "Loaded token secret");
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JwtSecret(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_once_then_reuses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret.dat");

        let first = JwtSecret::load_or_generate(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap().len(), SECRET_LEN);

        let second = JwtSecret::load_or_generate(&path).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_empty_file_is_filled() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let secret = JwtSecret::load_or_generate(file.path()).unwrap();

        assert_eq!(fs::read(file.path()).unwrap(), secret.as_bytes());
    }

    #[test]
    fn test_short_file_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), b"short").unwrap();

        let err = JwtSecret::load_or_generate(file.path()).unwrap_err();

        assert!(matches!(err, SecretError::TooShort { len: 5, .. }));
    }

    #[test]
    fn test_long_file_uses_prefix() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let content: Vec<u8> = (0..48).collect();
        fs::write(file.path(), &content).unwrap();

        let secret = JwtSecret::load_or_generate(file.path()).unwrap();

        assert_eq!(secret.as_bytes(), &content[..SECRET_LEN]);
    }

    #[test]
    fn test_debug_hides_bytes() {
        assert_eq!(format!("{:?}", JwtSecret::from_bytes([7; SECRET_LEN])), "JwtSecret(..)");
    }
}
