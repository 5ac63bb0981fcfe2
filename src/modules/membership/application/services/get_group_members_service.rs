use async_trait::async_trait;

use crate::membership::application::ports::{
    incoming::use_cases::{GetGroupMembersError, GetGroupMembersUseCase, GroupMembersResult},
    outgoing::MembershipQuery,
};

#[derive(Debug, Clone)]
pub struct GetGroupMembersService<Q>
where
    Q: MembershipQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetGroupMembersService<Q>
where
    Q: MembershipQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetGroupMembersUseCase for GetGroupMembersService<Q>
where
    Q: MembershipQuery + Send + Sync,
{
    async fn execute(
        &self,
        group_id: i32,
        include_deleted: bool,
    ) -> Result<GroupMembersResult, GetGroupMembersError> {
        let members = self
            .query
            .list_group_members(group_id, include_deleted)
            .await
            .map_err(|e| GetGroupMembersError::QueryFailed(e.to_string()))?;

        Ok(GroupMembersResult {
            group_id,
            total_count: members.len(),
            members,
        })
    }
}
