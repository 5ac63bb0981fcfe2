use async_trait::async_trait;

use crate::user::application::{
    domain::user_policy::{validate_email, validate_name, validate_password, UserFieldError},
    ports::outgoing::UserResult,
};

//
// ──────────────────────────────────────────────────────────
// Update User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    user_id: i32,
    name: Option<String>,
    email: Option<String>,
    password_change: Option<PasswordChange>,
}

#[derive(Debug, Clone)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateUserCommandError {
    #[error(transparent)]
    InvalidField(#[from] UserFieldError),

    #[error("Current password is required to set a new password")]
    CurrentPasswordRequired,
}

impl UpdateUserCommand {
    pub fn new(
        user_id: i32,
        name: Option<String>,
        email: Option<String>,
        current_password: Option<String>,
        new_password: Option<String>,
    ) -> Result<Self, UpdateUserCommandError> {
        let name = name.as_deref().map(validate_name).transpose()?;
        let email = email.as_deref().map(validate_email).transpose()?;

        let password_change = match new_password {
            Some(new_password) => {
                validate_password(&new_password)?;
                let current_password = current_password
                    .filter(|p| !p.is_empty())
                    .ok_or(UpdateUserCommandError::CurrentPasswordRequired)?;
                Some(PasswordChange {
                    current_password,
                    new_password,
                })
            }
            None => None,
        };

        Ok(Self {
            user_id,
            name,
            email,
            password_change,
        })
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn password_change(&self) -> Option<&PasswordChange> {
        self.password_change.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("User name already exists")]
    NameAlreadyExists,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Current password is incorrect")]
    InvalidCurrentPassword,

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
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, command: UpdateUserCommand) -> Result<UserResult, UpdateUserError>;
}
