use async_trait::async_trait;

use crate::user::application::ports::{
    incoming::use_cases::{GetUserError, GetUserUseCase},
    outgoing::{UserQuery, UserResult},
};

#[derive(Debug, Clone)]
pub struct GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserUseCase for GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: i32) -> Result<UserResult, GetUserError> {
        self.query
            .find_active_by_id(user_id)
            .await
            .map_err(|e| GetUserError::QueryFailed(e.to_string()))?
            .ok_or(GetUserError::UserNotFound)
    }
}
