use async_trait::async_trait;

use crate::user::application::ports::{
    incoming::use_cases::{GetUsersError, GetUsersUseCase, UserListResult},
    outgoing::UserQuery,
};

#[derive(Debug, Clone)]
pub struct GetUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUsersUseCase for GetUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<UserListResult, GetUsersError> {
        let users = self
            .query
            .list_active()
            .await
            .map_err(|e| GetUsersError::QueryFailed(e.to_string()))?;

        Ok(UserListResult {
            total: users.len(),
            users,
        })
    }
}
