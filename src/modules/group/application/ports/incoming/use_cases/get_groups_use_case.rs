use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::group::application::ports::outgoing::GroupResult;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupListResult {
    pub groups: Vec<GroupResult>,
    pub total: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetGroupsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetGroupsUseCase: Send + Sync {
    async fn execute(&self) -> Result<GroupListResult, GetGroupsError>;
}
