use async_trait::async_trait;
use tracing::warn;

use crate::group::application::ports::{
    incoming::use_cases::{DeleteAllGroupsError, DeleteAllGroupsUseCase},
    outgoing::GroupRepository,
};

#[derive(Debug, Clone)]
pub struct DeleteAllGroupsService<R>
where
    R: GroupRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteAllGroupsService<R>
where
    R: GroupRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteAllGroupsUseCase for DeleteAllGroupsService<R>
where
    R: GroupRepository + Send + Sync,
{
    async fn execute(&self) -> Result<u64, DeleteAllGroupsError> {
        let deleted = self
            .repository
            .soft_delete_all_groups()
            .await
            .map_err(|e| DeleteAllGroupsError::RepositoryError(e.to_string()))?;

        warn!(deleted, "All active groups soft-deleted");
        Ok(deleted)
    }
}
