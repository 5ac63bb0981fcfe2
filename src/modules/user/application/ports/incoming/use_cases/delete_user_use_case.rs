use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Soft delete; memberships of the user are left untouched.
#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: i32) -> Result<(), DeleteUserError>;
}
