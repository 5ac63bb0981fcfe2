use async_trait::async_trait;

use crate::membership::application::ports::{
    incoming::use_cases::{GetUserGroupsError, GetUserGroupsUseCase, UserGroupsResult},
    outgoing::MembershipQuery,
};

#[derive(Debug, Clone)]
pub struct GetUserGroupsService<Q>
where
    Q: MembershipQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUserGroupsService<Q>
where
    Q: MembershipQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserGroupsUseCase for GetUserGroupsService<Q>
where
    Q: MembershipQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: i32,
        include_deleted: bool,
    ) -> Result<UserGroupsResult, GetUserGroupsError> {
        let groups = self
            .query
            .list_user_groups(user_id, include_deleted)
            .await
            .map_err(|e| GetUserGroupsError::QueryFailed(e.to_string()))?;

        Ok(UserGroupsResult {
            user_id,
            total_count: groups.len(),
            groups,
        })
    }
}
