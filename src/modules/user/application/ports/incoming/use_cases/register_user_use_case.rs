use async_trait::async_trait;

use crate::user::application::{
    domain::user_policy::{validate_email, validate_name, validate_password, UserFieldError},
    ports::outgoing::UserResult,
};

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    name: String,
    email: String,
    password: String,
}

impl RegisterUserCommand {
    pub fn new(name: String, email: String, password: String) -> Result<Self, UserFieldError> {
        let name = validate_name(&name)?;
        let email = validate_email(&email)?;
        validate_password(&password)?;

        Ok(Self {
            name,
            email,
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("User name already exists")]
    NameAlreadyExists,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed")]
    HashingFailed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserResult, RegisterUserError>;
}
