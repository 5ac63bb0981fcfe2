use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAllUsersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteAllUsersUseCase: Send + Sync {
    /// Returns how many users were soft-deleted.
    async fn execute(&self) -> Result<u64, DeleteAllUsersError>;
}
