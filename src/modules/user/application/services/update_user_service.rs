use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::user::application::ports::{
    incoming::use_cases::{UpdateUserCommand, UpdateUserError, UpdateUserUseCase},
    outgoing::{UpdateUserData, UserQuery, UserRepository, UserRepositoryError, UserResult},
};

#[derive(Clone)]
pub struct UpdateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> UpdateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }

    fn query_err(e: impl std::fmt::Display) -> UpdateUserError {
        UpdateUserError::RepositoryError(e.to_string())
    }
}

#[async_trait]
impl<Q, R> UpdateUserUseCase for UpdateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateUserCommand) -> Result<UserResult, UpdateUserError> {
        let user_id = command.user_id();

        let current = self
            .query
            .find_active_by_id(user_id)
            .await
            .map_err(Self::query_err)?
            .ok_or(UpdateUserError::UserNotFound)?;

        // Uniqueness is checked against other active users only
        if let Some(name) = command.name() {
            if name != current.name {
                let taken = self
                    .query
                    .find_active_by_name(name)
                    .await
                    .map_err(Self::query_err)?;
                if taken.is_some_and(|other| other.id != user_id) {
                    return Err(UpdateUserError::NameAlreadyExists);
                }
            }
        }

        if let Some(email) = command.email() {
            if email != current.email {
                let taken = self
                    .query
                    .find_active_by_email(email)
                    .await
                    .map_err(Self::query_err)?;
                if taken.is_some_and(|other| other.id != user_id) {
                    return Err(UpdateUserError::EmailAlreadyExists);
                }
            }
        }

        let mut password_hash = None;
        if let Some(change) = command.password_change() {
            let stored_hash = self
                .query
                .find_password_hash(user_id)
                .await
                .map_err(Self::query_err)?
                .ok_or(UpdateUserError::UserNotFound)?;

            let matches = self
                .hasher
                .verify_password(&change.current_password, &stored_hash)
                .await
                .map_err(|e| {
                    error!("Password verification failed: {}", e);
                    UpdateUserError::HashingFailed
                })?;
            if !matches {
                return Err(UpdateUserError::InvalidCurrentPassword);
            }

            password_hash = Some(
                self.hasher
                    .hash_password(&change.new_password)
                    .await
                    .map_err(|e| {
                        error!("Password hashing failed: {}", e);
                        UpdateUserError::HashingFailed
                    })?,
            );
        }

        let data = UpdateUserData {
            name: command.name().map(str::to_string),
            email: command.email().map(str::to_string),
            password_hash,
        };

        let updated = self
            .repository
            .update_user(user_id, data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
                UserRepositoryError::NameAlreadyExists => UpdateUserError::NameAlreadyExists,
                UserRepositoryError::EmailAlreadyExists => UpdateUserError::EmailAlreadyExists,
                other => UpdateUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id, "User updated");
        Ok(updated)
    }
}
