use async_trait::async_trait;
use tracing::info;

use crate::membership::application::ports::{
    incoming::use_cases::{AddMemberError, AddMemberUseCase},
    outgoing::{
        MembershipQuery, MembershipQueryError, MembershipRepository, MembershipRepositoryError,
        MembershipResult,
    },
};

#[derive(Debug, Clone)]
pub struct AddMemberService<Q, R>
where
    Q: MembershipQuery + Send + Sync,
    R: MembershipRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> AddMemberService<Q, R>
where
    Q: MembershipQuery + Send + Sync,
    R: MembershipRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> AddMemberUseCase for AddMemberService<Q, R>
where
    Q: MembershipQuery + Send + Sync,
    R: MembershipRepository + Send + Sync,
{
    async fn execute(
        &self,
        group_id: i32,
        user_id: i32,
    ) -> Result<MembershipResult, AddMemberError> {
        let query_err = |e: MembershipQueryError| AddMemberError::RepositoryError(e.to_string());

        // Group first, then user, then the pair
        if !self.query.group_is_active(group_id).await.map_err(query_err)? {
            return Err(AddMemberError::GroupNotFound(group_id));
        }
        if !self.query.user_is_active(user_id).await.map_err(query_err)? {
            return Err(AddMemberError::UserNotFound(user_id));
        }
        if self
            .query
            .find_active(user_id, group_id)
            .await
            .map_err(query_err)?
            .is_some()
        {
            return Err(AddMemberError::AlreadyMember);
        }

        let membership = self
            .repository
            .create_membership(user_id, group_id)
            .await
            .map_err(|e| match e {
                MembershipRepositoryError::AlreadyMember => AddMemberError::AlreadyMember,
                other => AddMemberError::RepositoryError(other.to_string()),
            })?;

        info!(group_id, user_id, membership_id = membership.id, "Member added");
        Ok(membership)
    }
}
