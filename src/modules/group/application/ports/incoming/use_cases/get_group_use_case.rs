use async_trait::async_trait;

use crate::group::application::ports::outgoing::GroupResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetGroupError {
    #[error("Group not found")]
    GroupNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetGroupUseCase: Send + Sync {
    async fn execute(&self, group_id: i32) -> Result<GroupResult, GetGroupError>;
}
