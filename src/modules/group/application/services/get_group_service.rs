use async_trait::async_trait;

use crate::group::application::ports::{
    incoming::use_cases::{GetGroupError, GetGroupUseCase},
    outgoing::{GroupQuery, GroupResult},
};

#[derive(Debug, Clone)]
pub struct GetGroupService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetGroupService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetGroupUseCase for GetGroupService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    async fn execute(&self, group_id: i32) -> Result<GroupResult, GetGroupError> {
        self.query
            .find_active_by_id(group_id)
            .await
            .map_err(|e| GetGroupError::QueryFailed(e.to_string()))?
            .ok_or(GetGroupError::GroupNotFound)
    }
}
