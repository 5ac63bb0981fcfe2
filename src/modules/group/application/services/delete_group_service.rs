use async_trait::async_trait;
use tracing::info;

use crate::group::application::ports::{
    incoming::use_cases::{DeleteGroupError, DeleteGroupUseCase},
    outgoing::{GroupRepository, GroupRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteGroupUseCase for DeleteGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    async fn execute(&self, group_id: i32) -> Result<(), DeleteGroupError> {
        // Memberships of the group are left untouched
        self.repository
            .soft_delete_group(group_id)
            .await
            .map_err(|e| match e {
                GroupRepositoryError::GroupNotFound => DeleteGroupError::GroupNotFound,
                other => DeleteGroupError::RepositoryError(other.to_string()),
            })?;

        info!(group_id, "Group soft-deleted");
        Ok(())
    }
}
