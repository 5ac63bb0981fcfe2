use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RemoveMemberError {
    #[error("Membership not found")]
    MembershipNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveMemberUseCase: Send + Sync {
    async fn execute(&self, group_id: i32, user_id: i32) -> Result<(), RemoveMemberError>;
}
