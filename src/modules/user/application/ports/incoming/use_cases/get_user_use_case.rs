use async_trait::async_trait;

use crate::user::application::ports::outgoing::UserResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, user_id: i32) -> Result<UserResult, GetUserError>;
}
