use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::user::application::ports::outgoing::UserResult;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserListResult {
    pub users: Vec<UserResult>,
    pub total: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUsersError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<UserListResult, GetUsersError>;
}
