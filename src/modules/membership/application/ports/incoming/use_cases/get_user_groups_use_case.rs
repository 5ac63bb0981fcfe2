use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::membership::application::ports::outgoing::UserGroupView;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserGroupsResult {
    pub user_id: i32,
    pub groups: Vec<UserGroupView>,
    pub total_count: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserGroupsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetUserGroupsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: i32,
        include_deleted: bool,
    ) -> Result<UserGroupsResult, GetUserGroupsError>;
}
