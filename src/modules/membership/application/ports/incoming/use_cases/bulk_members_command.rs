/// Group plus a non-empty list of user ids. Order and duplicates are kept.
#[derive(Debug, Clone)]
pub struct BulkMembersCommand {
    group_id: i32,
    user_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BulkMembersCommandError {
    #[error("user_ids must contain at least one id")]
    EmptyUserIds,
}

impl BulkMembersCommand {
    pub fn new(group_id: i32, user_ids: Vec<i32>) -> Result<Self, BulkMembersCommandError> {
        if user_ids.is_empty() {
            return Err(BulkMembersCommandError::EmptyUserIds);
        }
        Ok(Self { group_id, user_ids })
    }

    pub fn group_id(&self) -> i32 {
        self.group_id
    }

    pub fn user_ids(&self) -> &[i32] {
        &self.user_ids
    }
}
