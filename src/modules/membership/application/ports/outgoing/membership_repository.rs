use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `is_active` is derived from `deleted_at` and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MembershipResult {
    #[schema(example = 10)]
    pub id: i32,
    #[schema(example = 3)]
    pub user_id: i32,
    #[schema(example = 1)]
    pub group_id: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MembershipRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User is already a member of this group")]
    AlreadyMember,

    #[error("Membership not found")]
    MembershipNotFound,
}

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Fails with `AlreadyMember` when an active row for the pair exists.
    async fn create_membership(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<MembershipResult, MembershipRepositoryError>;

    /// Soft deletes the active row for the pair.
    async fn soft_delete_active(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<(), MembershipRepositoryError>;
}
