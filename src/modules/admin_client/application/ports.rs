use async_trait::async_trait;

use super::ClientError;
use crate::membership::application::ports::{
    incoming::use_cases::GroupMembersResult, outgoing::MembershipResult,
};

/// One remote call per membership query or mutation.
#[async_trait]
pub trait MembershipAccessor: Send + Sync {
    /// Whether a bearer token is available for authenticated calls.
    fn has_credential(&self) -> bool;

    async fn list(
        &self,
        group_id: i32,
        include_deleted: bool,
    ) -> Result<GroupMembersResult, ClientError>;

    /// `Conflict` when the pair is already active, `NotFound` for an unknown group or user.
    async fn add(&self, group_id: i32, user_id: i32) -> Result<MembershipResult, ClientError>;

    /// Returns the server's confirmation message.
    async fn remove(&self, group_id: i32, user_id: i32) -> Result<String, ClientError>;
}

#[async_trait]
pub trait RecordDeleter: Send + Sync {
    async fn delete_group(&self, group_id: i32) -> Result<String, ClientError>;

    async fn delete_user(&self, user_id: i32) -> Result<String, ClientError>;
}
