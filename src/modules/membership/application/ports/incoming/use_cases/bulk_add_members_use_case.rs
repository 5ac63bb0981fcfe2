use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::BulkMembersCommand;

/// `added_count + already_member_count + errors.len()` equals the number of ids sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BulkAddResult {
    #[schema(example = "Bulk member add completed")]
    pub message: String,
    pub group_id: i32,
    pub added_count: usize,
    pub already_member_count: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BulkAddMembersError {
    #[error("Group {0} not found")]
    GroupNotFound(i32),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait BulkAddMembersUseCase: Send + Sync {
    async fn execute(&self, command: BulkMembersCommand)
        -> Result<BulkAddResult, BulkAddMembersError>;
}
