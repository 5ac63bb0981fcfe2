use async_trait::async_trait;

use crate::membership::application::ports::{
    incoming::use_cases::{CheckMembershipError, CheckMembershipUseCase, MembershipStatus},
    outgoing::MembershipQuery,
};

#[derive(Debug, Clone)]
pub struct CheckMembershipService<Q>
where
    Q: MembershipQuery + Send + Sync,
{
    query: Q,
}

impl<Q> CheckMembershipService<Q>
where
    Q: MembershipQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> CheckMembershipUseCase for CheckMembershipService<Q>
where
    Q: MembershipQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<MembershipStatus, CheckMembershipError> {
        let is_member = self
            .query
            .find_active(user_id, group_id)
            .await
            .map_err(|e| CheckMembershipError::QueryFailed(e.to_string()))?
            .is_some();

        Ok(MembershipStatus {
            user_id,
            group_id,
            is_member,
        })
    }
}
