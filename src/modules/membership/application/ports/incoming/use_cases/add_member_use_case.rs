use async_trait::async_trait;

use crate::membership::application::ports::outgoing::MembershipResult;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddMemberError {
    #[error("Group {0} not found")]
    GroupNotFound(i32),

    #[error("User {0} not found")]
    UserNotFound(i32),

    #[error("User is already a member of this group")]
    AlreadyMember,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddMemberUseCase: Send + Sync {
    async fn execute(&self, group_id: i32, user_id: i32)
        -> Result<MembershipResult, AddMemberError>;
}
