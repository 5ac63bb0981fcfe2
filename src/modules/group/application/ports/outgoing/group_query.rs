use async_trait::async_trait;

use super::GroupResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GroupQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait GroupQuery: Send + Sync {
    async fn find_active_by_id(&self, group_id: i32)
        -> Result<Option<GroupResult>, GroupQueryError>;

    async fn find_active_by_name(&self, name: &str)
        -> Result<Option<GroupResult>, GroupQueryError>;

    async fn list_active(&self) -> Result<Vec<GroupResult>, GroupQueryError>;
}
