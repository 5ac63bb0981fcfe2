use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::MembershipResult;

/// One row of a group's member listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupMemberView {
    pub membership_id: i32,
    pub user_id: i32,
    #[schema(example = "alice")]
    pub user_name: String,
    #[schema(example = "alice@example.com")]
    pub user_email: String,
    pub joined_at: DateTime<Utc>,
    pub is_active: bool,
}

/// One row of a user's group listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserGroupView {
    pub membership_id: i32,
    pub group_id: i32,
    #[schema(example = "engineering")]
    pub group_name: String,
    pub group_description: Option<String>,
    pub joined_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MembershipQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MembershipQuery: Send + Sync {
    async fn find_active(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<Option<MembershipResult>, MembershipQueryError>;

    async fn list_group_members(
        &self,
        group_id: i32,
        include_deleted: bool,
    ) -> Result<Vec<GroupMemberView>, MembershipQueryError>;

    async fn list_user_groups(
        &self,
        user_id: i32,
        include_deleted: bool,
    ) -> Result<Vec<UserGroupView>, MembershipQueryError>;

    async fn group_is_active(&self, group_id: i32) -> Result<bool, MembershipQueryError>;

    async fn user_is_active(&self, user_id: i32) -> Result<bool, MembershipQueryError>;
}
