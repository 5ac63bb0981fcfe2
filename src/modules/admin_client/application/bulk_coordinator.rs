use futures::future::join_all;
use std::future::Future;
use tracing::{info, warn};

use super::{ClientError, MembershipAccessor};

/// How per-user calls of one batch are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// One call in flight at a time, in input order.
    #[default]
    Sequential,
    /// Every call in flight at once.
    Concurrent,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BulkAddSummary {
    pub group_id: i32,
    pub added_count: usize,
    pub already_member_count: usize,
    /// `"user {id}: {message}"`, in input order
    pub errors: Vec<String>,
}

impl BulkAddSummary {
    pub fn has_failures(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_complete_success(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BulkRemoveSummary {
    pub group_id: i32,
    pub removed_count: usize,
    pub not_member_count: usize,
    pub errors: Vec<String>,
}

impl BulkRemoveSummary {
    pub fn has_failures(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_complete_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Applies add or remove to a list of users of one group.
///
/// Every item settles before the summary is returned. Nothing is rolled back:
/// items that succeeded stay applied when others fail.
pub struct BulkMembershipCoordinator<A>
where
    A: MembershipAccessor,
{
    accessor: A,
    mode: DispatchMode,
}

impl<A> BulkMembershipCoordinator<A>
where
    A: MembershipAccessor,
{
    pub fn new(accessor: A, mode: DispatchMode) -> Self {
        Self { accessor, mode }
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    pub async fn add_members(
        &self,
        group_id: i32,
        user_ids: &[i32],
    ) -> Result<BulkAddSummary, ClientError> {
        let mut summary = BulkAddSummary {
            group_id,
            ..Default::default()
        };
        if user_ids.is_empty() {
            return Ok(summary);
        }
        if !self.accessor.has_credential() {
            return Err(ClientError::MissingCredential);
        }

        let outcomes = self
            .dispatch(user_ids, |user_id| self.accessor.add(group_id, user_id))
            .await;

        for (user_id, outcome) in outcomes {
            match outcome {
                Ok(_) => summary.added_count += 1,
                Err(ClientError::Conflict(_)) => summary.already_member_count += 1,
                Err(e) => {
                    warn!(group_id, user_id, "Failed to add member: {}", e);
                    summary.errors.push(format!("user {}: {}", user_id, e));
                }
            }
        }

        info!(
            group_id,
            added = summary.added_count,
            already_member = summary.already_member_count,
            failed = summary.errors.len(),
            "Bulk add settled"
        );
        Ok(summary)
    }

    pub async fn remove_members(
        &self,
        group_id: i32,
        user_ids: &[i32],
    ) -> Result<BulkRemoveSummary, ClientError> {
        let mut summary = BulkRemoveSummary {
            group_id,
            ..Default::default()
        };
        if user_ids.is_empty() {
            return Ok(summary);
        }
        if !self.accessor.has_credential() {
            return Err(ClientError::MissingCredential);
        }

        let outcomes = self
            .dispatch(user_ids, |user_id| self.accessor.remove(group_id, user_id))
            .await;

        for (user_id, outcome) in outcomes {
            match outcome {
                Ok(_) => summary.removed_count += 1,
                Err(ClientError::NotFound(_)) => summary.not_member_count += 1,
                Err(e) => {
                    warn!(group_id, user_id, "Failed to remove member: {}", e);
                    summary.errors.push(format!("user {}: {}", user_id, e));
                }
            }
        }

        info!(
            group_id,
            removed = summary.removed_count,
            not_member = summary.not_member_count,
            failed = summary.errors.len(),
            "Bulk remove settled"
        );
        Ok(summary)
    }

    /// Outcomes come back in input order in both modes.
    async fn dispatch<F, Fut, T>(
        &self,
        user_ids: &[i32],
        call: F,
    ) -> Vec<(i32, Result<T, ClientError>)>
    where
        F: Fn(i32) -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        match self.mode {
            DispatchMode::Sequential => {
                let mut outcomes = Vec::with_capacity(user_ids.len());
                for &user_id in user_ids {
                    outcomes.push((user_id, call(user_id).await));
                }
                outcomes
            }
            DispatchMode::Concurrent => {
                join_all(user_ids.iter().map(|&user_id| {
                    let pending = call(user_id);
                    async move { (user_id, pending.await) }
                }))
                .await
            }
        }
    }
}
