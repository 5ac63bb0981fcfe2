use async_trait::async_trait;
use tracing::info;

use crate::group::application::ports::{
    incoming::use_cases::{CreateGroupCommand, CreateGroupError, CreateGroupUseCase},
    outgoing::{CreateGroupData, GroupQuery, GroupRepository, GroupRepositoryError, GroupResult},
};

#[derive(Debug, Clone)]
pub struct CreateGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateGroupUseCase for CreateGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    async fn execute(&self, command: CreateGroupCommand) -> Result<GroupResult, CreateGroupError> {
        let existing = self
            .query
            .find_active_by_name(command.name())
            .await
            .map_err(|e| CreateGroupError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(CreateGroupError::NameAlreadyExists);
        }

        let group = self
            .repository
            .create_group(CreateGroupData {
                name: command.name().to_string(),
                description: command.description().map(str::to_string),
            })
            .await
            .map_err(|e| match e {
                GroupRepositoryError::NameAlreadyExists => CreateGroupError::NameAlreadyExists,
                other => CreateGroupError::RepositoryError(other.to_string()),
            })?;

        info!(group_id = group.id, "Group created");
        Ok(group)
    }
}
