use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::membership::application::ports::outgoing::GroupMemberView;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupMembersResult {
    pub group_id: i32,
    pub members: Vec<GroupMemberView>,
    pub total_count: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetGroupMembersError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Unknown groups yield an empty listing rather than an error.
#[async_trait]
pub trait GetGroupMembersUseCase: Send + Sync {
    async fn execute(
        &self,
        group_id: i32,
        include_deleted: bool,
    ) -> Result<GroupMembersResult, GetGroupMembersError>;
}
