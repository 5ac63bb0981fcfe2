use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::user::application::ports::{
    incoming::use_cases::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
    outgoing::{CreateUserData, UserQuery, UserRepository, UserRepositoryError, UserResult},
};

#[derive(Clone)]
pub struct RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserResult, RegisterUserError> {
        let existing_name = self
            .query
            .find_active_by_name(command.name())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing_name.is_some() {
            return Err(RegisterUserError::NameAlreadyExists);
        }

        let existing_email = self
            .query
            .find_active_by_email(command.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing_email.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| {
                error!("Password hashing failed: {}", e);
                RegisterUserError::HashingFailed
            })?;

        let user = self
            .repository
            .create_user(CreateUserData {
                name: command.name().to_string(),
                email: command.email().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::NameAlreadyExists => RegisterUserError::NameAlreadyExists,
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = user.id, "User registered");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::HashError;
    use crate::tests::support::mocks::{MockPasswordHasher, MockUserQuery, MockUserRepository};
    use chrono::Utc;

    fn sample_user(id: i32, name: &str, email: &str) -> UserResult {
        let now = Utc::now();
        UserResult {
            id,
            name: name.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    fn command() -> RegisterUserCommand {
        RegisterUserCommand::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "password123".to_string(),
        )
        .unwrap()
    }

    fn hasher_returning(hash: &'static str) -> Arc<dyn PasswordHasher + Send + Sync> {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash_password()
            .returning(move |_| Ok(hash.to_string()));
        Arc::new(hasher)
    }

    #[tokio::test]
    async fn register_stores_hashed_password() {
        let mut query = MockUserQuery::new();
        query.expect_find_active_by_name().returning(|_| Ok(None));
        query.expect_find_active_by_email().returning(|_| Ok(None));

        let mut repo = MockUserRepository::new();
        repo.expect_create_user()
            .withf(|data| data.password_hash == "$argon2id$hashed" && data.name == "alice")
            .times(1)
            .returning(|data| Ok(sample_user(1, &data.name, &data.email)));

        let service = RegisterUserService::new(query, repo, hasher_returning("$argon2id$hashed"));

        let user = service.execute(command()).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "alice@example.com");
    }

    #[tokio::test]
    async fn register_rejects_taken_name() {
        let mut query = MockUserQuery::new();
        query
            .expect_find_active_by_name()
            .returning(|_| Ok(Some(sample_user(9, "alice", "other@example.com"))));

        let mut repo = MockUserRepository::new();
        repo.expect_create_user().never();

        let service = RegisterUserService::new(query, repo, hasher_returning("unused"));

        let result = service.execute(command()).await;
        assert!(matches!(result, Err(RegisterUserError::NameAlreadyExists)));
    }

    #[tokio::test]
    async fn register_rejects_taken_email() {
        let mut query = MockUserQuery::new();
        query.expect_find_active_by_name().returning(|_| Ok(None));
        query
            .expect_find_active_by_email()
            .returning(|_| Ok(Some(sample_user(9, "someone", "alice@example.com"))));

        let mut repo = MockUserRepository::new();
        repo.expect_create_user().never();

        let service = RegisterUserService::new(query, repo, hasher_returning("unused"));

        let result = service.execute(command()).await;
        assert!(matches!(result, Err(RegisterUserError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn register_maps_unique_violation_race() {
        let mut query = MockUserQuery::new();
        query.expect_find_active_by_name().returning(|_| Ok(None));
        query.expect_find_active_by_email().returning(|_| Ok(None));

        let mut repo = MockUserRepository::new();
        repo.expect_create_user()
            .returning(|_| Err(UserRepositoryError::EmailAlreadyExists));

        let service = RegisterUserService::new(query, repo, hasher_returning("hash"));

        let result = service.execute(command()).await;
        assert!(matches!(result, Err(RegisterUserError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn register_hashing_failure() {
        let mut query = MockUserQuery::new();
        query.expect_find_active_by_name().returning(|_| Ok(None));
        query.expect_find_active_by_email().returning(|_| Ok(None));

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash_password()
            .returning(|_| Err(HashError::TaskFailed));

        let service =
            RegisterUserService::new(query, MockUserRepository::new(), Arc::new(hasher));

        let result = service.execute(command()).await;
        assert!(matches!(result, Err(RegisterUserError::HashingFailed)));
    }
}
