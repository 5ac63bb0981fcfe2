use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// User as exposed to callers. The password hash never leaves the adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResult {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User not found")]
    UserNotFound,

    #[error("User name already exists")]
    NameAlreadyExists,

    #[error("Email already exists")]
    EmailAlreadyExists,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    async fn update_user(
        &self,
        user_id: i32,
        data: UpdateUserData,
    ) -> Result<UserResult, UserRepositoryError>;

    async fn soft_delete_user(&self, user_id: i32) -> Result<(), UserRepositoryError>;

    /// Returns the number of users that were active before the call.
    async fn soft_delete_all_users(&self) -> Result<u64, UserRepositoryError>;
}
