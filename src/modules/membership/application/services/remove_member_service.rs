use async_trait::async_trait;
use tracing::info;

use crate::membership::application::ports::{
    incoming::use_cases::{RemoveMemberError, RemoveMemberUseCase},
    outgoing::{MembershipRepository, MembershipRepositoryError},
};

#[derive(Debug, Clone)]
pub struct RemoveMemberService<R>
where
    R: MembershipRepository + Send + Sync,
{
    repository: R,
}

impl<R> RemoveMemberService<R>
where
    R: MembershipRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RemoveMemberUseCase for RemoveMemberService<R>
where
    R: MembershipRepository + Send + Sync,
{
    async fn execute(&self, group_id: i32, user_id: i32) -> Result<(), RemoveMemberError> {
        self.repository
            .soft_delete_active(user_id, group_id)
            .await
            .map_err(|e| match e {
                MembershipRepositoryError::MembershipNotFound => {
                    RemoveMemberError::MembershipNotFound
                }
                other => RemoveMemberError::RepositoryError(other.to_string()),
            })?;

        info!(group_id, user_id, "Member removed");
        Ok(())
    }
}
