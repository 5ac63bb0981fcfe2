use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ========================= Login Command =========================

/// Validated login input. Email is trimmed; password is kept as sent.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Result<Self, LoginCommandError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginCommandError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(LoginCommandError::InvalidEmailFormat);
        }
        if password.is_empty() {
            return Err(LoginCommandError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_string(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Login Error ===========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ========================= Login Result ==========================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResult {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// Always "bearer"
    #[schema(example = "bearer")]
    pub token_type: String,
}

impl LoginResult {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError>;
}
