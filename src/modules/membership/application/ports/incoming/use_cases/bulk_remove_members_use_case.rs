use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::BulkMembersCommand;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BulkRemoveResult {
    #[schema(example = "Bulk member removal completed")]
    pub message: String,
    pub group_id: i32,
    pub removed_count: usize,
    pub not_member_count: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BulkRemoveMembersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait BulkRemoveMembersUseCase: Send + Sync {
    async fn execute(
        &self,
        command: BulkMembersCommand,
    ) -> Result<BulkRemoveResult, BulkRemoveMembersError>;
}
