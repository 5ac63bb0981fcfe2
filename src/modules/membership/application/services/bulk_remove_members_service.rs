use async_trait::async_trait;
use tracing::{info, warn};

use crate::membership::application::ports::{
    incoming::use_cases::{
        BulkMembersCommand, BulkRemoveMembersError, BulkRemoveMembersUseCase, BulkRemoveResult,
    },
    outgoing::{MembershipRepository, MembershipRepositoryError},
};

/// Group existence is not checked; an unknown group just yields `not_member_count`.
#[derive(Debug, Clone)]
pub struct BulkRemoveMembersService<R>
where
    R: MembershipRepository + Send + Sync,
{
    repository: R,
}

impl<R> BulkRemoveMembersService<R>
where
    R: MembershipRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> BulkRemoveMembersUseCase for BulkRemoveMembersService<R>
where
    R: MembershipRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: BulkMembersCommand,
    ) -> Result<BulkRemoveResult, BulkRemoveMembersError> {
        let group_id = command.group_id();

        let mut removed_count = 0;
        let mut not_member_count = 0;
        let mut errors = Vec::new();

        for &user_id in command.user_ids() {
            match self.repository.soft_delete_active(user_id, group_id).await {
                Ok(()) => removed_count += 1,
                Err(MembershipRepositoryError::MembershipNotFound) => not_member_count += 1,
                Err(e) => {
                    warn!(group_id, user_id, "Bulk remove item failed: {}", e);
                    errors.push(format!("Failed to remove user {}: {}", user_id, e));
                }
            }
        }

        info!(
            group_id,
            removed_count,
            not_member_count,
            failed = errors.len(),
            "Bulk remove finished"
        );

        Ok(BulkRemoveResult {
            message: "Bulk member removal completed".to_string(),
            group_id,
            removed_count,
            not_member_count,
            errors,
        })
    }
}
