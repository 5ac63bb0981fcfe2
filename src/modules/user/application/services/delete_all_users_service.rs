use async_trait::async_trait;
use tracing::warn;

use crate::user::application::ports::{
    incoming::use_cases::{DeleteAllUsersError, DeleteAllUsersUseCase},
    outgoing::UserRepository,
};

#[derive(Debug, Clone)]
pub struct DeleteAllUsersService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteAllUsersService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteAllUsersUseCase for DeleteAllUsersService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self) -> Result<u64, DeleteAllUsersError> {
        let deleted = self
            .repository
            .soft_delete_all_users()
            .await
            .map_err(|e| DeleteAllUsersError::RepositoryError(e.to_string()))?;

        warn!(deleted, "All active users soft-deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::mocks::MockUserRepository;

    #[tokio::test]
    async fn returns_deleted_count() {
        let mut repo = MockUserRepository::new();
        repo.expect_soft_delete_all_users().returning(|| Ok(5));

        assert_eq!(DeleteAllUsersService::new(repo).execute().await.unwrap(), 5);
    }
}
