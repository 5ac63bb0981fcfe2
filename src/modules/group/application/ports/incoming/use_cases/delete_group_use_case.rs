use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteGroupError {
    #[error("Group not found")]
    GroupNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteGroupUseCase: Send + Sync {
    async fn execute(&self, group_id: i32) -> Result<(), DeleteGroupError>;
}
