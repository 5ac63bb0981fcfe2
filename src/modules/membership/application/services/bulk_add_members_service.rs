use async_trait::async_trait;
use tracing::{info, warn};

use crate::membership::application::ports::{
    incoming::use_cases::{
        BulkAddMembersError, BulkAddMembersUseCase, BulkAddResult, BulkMembersCommand,
    },
    outgoing::{MembershipQuery, MembershipRepository, MembershipRepositoryError},
};

enum AddOutcome {
    Added,
    AlreadyMember,
    Failed(String),
}

/// Adds users one at a time. Each item settles on its own; nothing is rolled back.
#[derive(Debug, Clone)]
pub struct BulkAddMembersService<Q, R>
where
    Q: MembershipQuery + Send + Sync,
    R: MembershipRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> BulkAddMembersService<Q, R>
where
    Q: MembershipQuery + Send + Sync,
    R: MembershipRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    async fn add_one(&self, group_id: i32, user_id: i32) -> AddOutcome {
        match self.query.user_is_active(user_id).await {
            Ok(true) => {}
            Ok(false) => return AddOutcome::Failed(format!("User {} not found", user_id)),
            Err(e) => return AddOutcome::Failed(format!("Failed to add user {}: {}", user_id, e)),
        }

        match self.query.find_active(user_id, group_id).await {
            Ok(Some(_)) => return AddOutcome::AlreadyMember,
            Ok(None) => {}
            Err(e) => return AddOutcome::Failed(format!("Failed to add user {}: {}", user_id, e)),
        }

        match self.repository.create_membership(user_id, group_id).await {
            Ok(_) => AddOutcome::Added,
            Err(MembershipRepositoryError::AlreadyMember) => AddOutcome::AlreadyMember,
            Err(e) => AddOutcome::Failed(format!("Failed to add user {}: {}", user_id, e)),
        }
    }
}

#[async_trait]
impl<Q, R> BulkAddMembersUseCase for BulkAddMembersService<Q, R>
where
    Q: MembershipQuery + Send + Sync,
    R: MembershipRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: BulkMembersCommand,
    ) -> Result<BulkAddResult, BulkAddMembersError> {
        let group_id = command.group_id();

        let group_ok = self
            .query
            .group_is_active(group_id)
            .await
            .map_err(|e| BulkAddMembersError::RepositoryError(e.to_string()))?;
        if !group_ok {
            return Err(BulkAddMembersError::GroupNotFound(group_id));
        }

        let mut added_count = 0;
        let mut already_member_count = 0;
        let mut errors = Vec::new();

        for &user_id in command.user_ids() {
            match self.add_one(group_id, user_id).await {
                AddOutcome::Added => added_count += 1,
                AddOutcome::AlreadyMember => already_member_count += 1,
                AddOutcome::Failed(msg) => {
                    warn!(group_id, user_id, "Bulk add item failed: {}", msg);
                    errors.push(msg);
                }
            }
        }

        info!(
            group_id,
            added_count,
            already_member_count,
            failed = errors.len(),
            "Bulk add finished"
        );

        Ok(BulkAddResult {
            message: "Bulk member add completed".to_string(),
            group_id,
            added_count,
            already_member_count,
            errors,
        })
    }
}
