use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::{
    incoming::use_cases::{LoginCommand, LoginError, LoginResult, LoginUserUseCase},
    outgoing::{CredentialQuery, PasswordHasher, TokenProvider},
};

pub struct LoginUserService<Q>
where
    Q: CredentialQuery + Send + Sync,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: CredentialQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: CredentialQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError> {
        // Soft-deleted users are never returned here
        let credentials = self
            .query
            .find_active_by_email(command.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .hasher
            .verify_password(command.password(), &credentials.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            warn!(user_id = credentials.user_id, "Login rejected: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(credentials.user_id, &credentials.email)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = credentials.user_id, "User logged in");
        Ok(LoginResult::bearer(access_token))
    }
}
