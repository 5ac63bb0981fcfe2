use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAllGroupsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteAllGroupsUseCase: Send + Sync {
    async fn execute(&self) -> Result<u64, DeleteAllGroupsError>;
}
