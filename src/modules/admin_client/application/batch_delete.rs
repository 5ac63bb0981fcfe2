use futures::future::try_join_all;
use tracing::{error, info};

use super::{ClientError, RecordDeleter};

/// Deletes many groups or users at once, all-or-nothing.
///
/// All deletes are issued together and the first failure fails the batch.
/// Deletes that already completed on the server are not undone.
pub struct BatchDeleter<D>
where
    D: RecordDeleter,
{
    deleter: D,
}

impl<D> BatchDeleter<D>
where
    D: RecordDeleter,
{
    pub fn new(deleter: D) -> Self {
        Self { deleter }
    }

    pub fn deleter(&self) -> &D {
        &self.deleter
    }

    /// Returns how many groups were deleted.
    pub async fn delete_groups(&self, group_ids: &[i32]) -> Result<usize, ClientError> {
        if group_ids.is_empty() {
            return Ok(0);
        }

        let deleted = try_join_all(group_ids.iter().map(|&id| self.deleter.delete_group(id)))
            .await
            .map_err(|e| {
                error!(count = group_ids.len(), "Batch group delete failed: {}", e);
                e
            })?;

        info!(count = deleted.len(), "Groups deleted");
        Ok(deleted.len())
    }

    /// Returns how many users were deleted.
    pub async fn delete_users(&self, user_ids: &[i32]) -> Result<usize, ClientError> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let deleted = try_join_all(user_ids.iter().map(|&id| self.deleter.delete_user(id)))
            .await
            .map_err(|e| {
                error!(count = user_ids.len(), "Batch user delete failed: {}", e);
                e
            })?;

        info!(count = deleted.len(), "Users deleted");
        Ok(deleted.len())
    }
}
