use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone)]
pub struct CreateGroupData {
    pub name: String,
    pub description: Option<String>,
}

/// `description: Some(None)` clears the stored description.
#[derive(Debug, Clone, Default)]
pub struct UpdateGroupData {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupResult {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "engineering")]
    pub name: String,
    #[schema(example = "Backend and platform engineers")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GroupRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Group not found")]
    GroupNotFound,

    #[error("Group name already exists")]
    NameAlreadyExists,
}

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn create_group(&self, data: CreateGroupData)
        -> Result<GroupResult, GroupRepositoryError>;

    async fn update_group(
        &self,
        group_id: i32,
        data: UpdateGroupData,
    ) -> Result<GroupResult, GroupRepositoryError>;

    async fn soft_delete_group(&self, group_id: i32) -> Result<(), GroupRepositoryError>;

    async fn soft_delete_all_groups(&self) -> Result<u64, GroupRepositoryError>;
}
