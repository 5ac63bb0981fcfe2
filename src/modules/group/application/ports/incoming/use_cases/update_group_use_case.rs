use async_trait::async_trait;

use crate::group::application::{
    domain::group_policy::{normalize_description, validate_group_name, GroupFieldError},
    ports::outgoing::GroupResult,
};

#[derive(Debug, Clone)]
pub struct UpdateGroupCommand {
    group_id: i32,
    name: Option<String>,
    description: Option<Option<String>>,
}

impl UpdateGroupCommand {
    /// An explicit blank description clears it; an absent one is left alone.
    pub fn new(
        group_id: i32,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Self, GroupFieldError> {
        let name = name.as_deref().map(validate_group_name).transpose()?;
        let description = description.map(|d| normalize_description(Some(d)));

        Ok(Self {
            group_id,
            name,
            description,
        })
    }

    pub fn group_id(&self) -> i32 {
        self.group_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<Option<&str>> {
        self.description.as_ref().map(|d| d.as_deref())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateGroupError {
    #[error("Group not found")]
    GroupNotFound,

    #[error("Group name already exists")]
    NameAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateGroupUseCase: Send + Sync {
    async fn execute(&self, command: UpdateGroupCommand) -> Result<GroupResult, UpdateGroupError>;
}
