use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;
use std::env;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};
use crate::shared::config::{parse_or, ConfigError};

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl Argon2Hasher {
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, ConfigError> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            ConfigError::Invalid {
                key: "ARGON2_*",
                reason: e.to_string(),
            }
        })?;

        Ok(Self { params })
    }

    /// Environment-based configuration; unset values fall back to a small-VPS profile.
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup = |key: &str| env::var(key).ok();

        let memory_kib = parse_or(&lookup, "ARGON2_MEMORY_KIB", 4 * 1024u32)?;
        let iterations = parse_or(&lookup, "ARGON2_ITERATIONS", 3u32)?;
        let parallelism = parse_or(&lookup, "ARGON2_PARALLELISM", 1u32)?;

        Self::with_params(memory_kib, iterations, parallelism)
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> Argon2Hasher {
        Argon2Hasher::with_params(1024, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_hash_and_verify_password() {
        let hasher = fast_hasher();
        let password = "SecurePassword123";

        let hashed_password = hasher.hash_password(password).await.unwrap();
        assert!(hashed_password.starts_with("$argon2id$"));

        let verify_correct = hasher.verify_password(password, &hashed_password).await;
        assert!(verify_correct.unwrap(), "Password should match");

        let verify_wrong = hasher
            .verify_password("WrongPassword", &hashed_password)
            .await;
        assert!(!verify_wrong.unwrap(), "Wrong password should not match");
    }

    #[tokio::test]
    async fn test_same_password_gets_distinct_salts() {
        let hasher = fast_hasher();

        let first = hasher.hash_password("password123").await.unwrap();
        let second = hasher.hash_password("password123").await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_verify_with_invalid_hash_format() {
        let hasher = fast_hasher();

        let result = hasher.verify_password("password", "not-a-phc-string").await;
        assert!(matches!(result, Err(HashError::VerifyFailed)));
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        // Argon2 requires at least 8 KiB per lane
        let result = Argon2Hasher::with_params(1, 1, 1);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}
