use async_trait::async_trait;
use tracing::info;

use crate::group::application::ports::{
    incoming::use_cases::{UpdateGroupCommand, UpdateGroupError, UpdateGroupUseCase},
    outgoing::{GroupQuery, GroupRepository, GroupRepositoryError, GroupResult, UpdateGroupData},
};

#[derive(Debug, Clone)]
pub struct UpdateGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateGroupUseCase for UpdateGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateGroupCommand) -> Result<GroupResult, UpdateGroupError> {
        let group_id = command.group_id();

        if let Some(name) = command.name() {
            let taken = self
                .query
                .find_active_by_name(name)
                .await
                .map_err(|e| UpdateGroupError::RepositoryError(e.to_string()))?;
            if taken.is_some_and(|other| other.id != group_id) {
                return Err(UpdateGroupError::NameAlreadyExists);
            }
        }

        let data = UpdateGroupData {
            name: command.name().map(str::to_string),
            description: command.description().map(|d| d.map(str::to_string)),
        };

        let group = self
            .repository
            .update_group(group_id, data)
            .await
            .map_err(|e| match e {
                GroupRepositoryError::GroupNotFound => UpdateGroupError::GroupNotFound,
                GroupRepositoryError::NameAlreadyExists => UpdateGroupError::NameAlreadyExists,
                other => UpdateGroupError::RepositoryError(other.to_string()),
            })?;

        info!(group_id, "Group updated");
        Ok(group)
    }
}
