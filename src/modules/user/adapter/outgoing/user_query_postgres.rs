use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::user::application::ports::outgoing::{UserQuery, UserQueryError, UserResult};

use super::sea_orm_entity::{Column as UserColumn, Entity as UserEntity, Model as UserModel};

#[derive(Debug, Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_one_active(
        &self,
        filter: sea_orm::sea_query::SimpleExpr,
    ) -> Result<Option<UserModel>, UserQueryError> {
        UserEntity::find()
            .filter(filter)
            .filter(UserColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_active_by_id(&self, user_id: i32) -> Result<Option<UserResult>, UserQueryError> {
        Ok(self
            .find_one_active(UserColumn::Id.eq(user_id))
            .await?
            .map(|m| m.to_repository_result()))
    }

    async fn find_active_by_name(&self, name: &str) -> Result<Option<UserResult>, UserQueryError> {
        Ok(self
            .find_one_active(UserColumn::Name.eq(name))
            .await?
            .map(|m| m.to_repository_result()))
    }

    async fn find_active_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserResult>, UserQueryError> {
        Ok(self
            .find_one_active(UserColumn::Email.eq(email))
            .await?
            .map(|m| m.to_repository_result()))
    }

    async fn list_active(&self) -> Result<Vec<UserResult>, UserQueryError> {
        let models: Vec<UserModel> = UserEntity::find()
            .filter(UserColumn::DeletedAt.is_null())
            .order_by_asc(UserColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_repository_result()).collect())
    }

    async fn find_password_hash(&self, user_id: i32) -> Result<Option<String>, UserQueryError> {
        Ok(self
            .find_one_active(UserColumn::Id.eq(user_id))
            .await?
            .map(|m| m.password_hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    fn user_model(id: i32, name: &str) -> UserModel {
        let now = Utc::now().fixed_offset();

        UserModel {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name),
            password_hash: format!("hash-{}", id),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn test_list_active_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(1, "alice"), user_model(2, "bob")]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        let users = query.list_active().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "alice");
        assert_eq!(users[1].email, "bob@example.com");
    }

    #[tokio::test]
    async fn test_list_active_excludes_soft_deleted_users() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![user_model(1, "alice")]])
                .into_connection(),
        );

        let query = UserQueryPostgres::new(Arc::clone(&db));
        query.list_active().await.unwrap();
        drop(query);

        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains(r#"\"users\".\"deleted_at\" IS NULL"#), "{}", sql);
    }

    #[tokio::test]
    async fn test_find_active_by_email_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        let found = query.find_active_by_email("ghost@example.com").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_password_hash() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(5, "carol")]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        let hash = query.find_password_hash(5).await.unwrap();
        assert_eq!(hash.as_deref(), Some("hash-5"));
    }

    #[tokio::test]
    async fn test_database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal("boom".into()))])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        let result = query.find_active_by_id(1).await;
        assert!(matches!(result, Err(UserQueryError::DatabaseError(_))));
    }
}
