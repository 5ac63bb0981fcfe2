use async_trait::async_trait;

use super::UserResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side over active (not soft-deleted) users.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_active_by_id(&self, user_id: i32) -> Result<Option<UserResult>, UserQueryError>;

    async fn find_active_by_name(&self, name: &str) -> Result<Option<UserResult>, UserQueryError>;

    async fn find_active_by_email(&self, email: &str)
        -> Result<Option<UserResult>, UserQueryError>;

    async fn list_active(&self) -> Result<Vec<UserResult>, UserQueryError>;

    async fn find_password_hash(&self, user_id: i32) -> Result<Option<String>, UserQueryError>;
}
