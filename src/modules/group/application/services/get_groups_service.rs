use async_trait::async_trait;

use crate::group::application::ports::{
    incoming::use_cases::{GetGroupsError, GetGroupsUseCase, GroupListResult},
    outgoing::GroupQuery,
};

#[derive(Debug, Clone)]
pub struct GetGroupsService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetGroupsService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetGroupsUseCase for GetGroupsService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    async fn execute(&self) -> Result<GroupListResult, GetGroupsError> {
        let groups = self
            .query
            .list_active()
            .await
            .map_err(|e| GetGroupsError::QueryFailed(e.to_string()))?;

        Ok(GroupListResult {
            total: groups.len(),
            groups,
        })
    }
}
