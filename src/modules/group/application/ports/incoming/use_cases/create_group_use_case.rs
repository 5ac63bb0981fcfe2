use async_trait::async_trait;

use crate::group::application::{
    domain::group_policy::{normalize_description, validate_group_name, GroupFieldError},
    ports::outgoing::GroupResult,
};

#[derive(Debug, Clone)]
pub struct CreateGroupCommand {
    name: String,
    description: Option<String>,
}

impl CreateGroupCommand {
    pub fn new(name: String, description: Option<String>) -> Result<Self, GroupFieldError> {
        Ok(Self {
            name: validate_group_name(&name)?,
            description: normalize_description(description),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateGroupError {
    #[error("Group name already exists")]
    NameAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateGroupUseCase: Send + Sync {
    async fn execute(&self, command: CreateGroupCommand) -> Result<GroupResult, CreateGroupError>;
}
