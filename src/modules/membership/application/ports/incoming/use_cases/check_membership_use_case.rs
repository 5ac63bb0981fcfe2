use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MembershipStatus {
    pub user_id: i32,
    pub group_id: i32,
    pub is_member: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckMembershipError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait CheckMembershipUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<MembershipStatus, CheckMembershipError>;
}
