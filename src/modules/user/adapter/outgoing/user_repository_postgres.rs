use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::user::application::ports::outgoing::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError, UserResult,
};
use crate::shared::persistence::is_unique_violation;

use super::sea_orm_entity::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_err(e: DbErr) -> UserRepositoryError {
        if is_unique_violation(&e) {
            if e.to_string().contains("idx_users_email_active") {
                return UserRepositoryError::EmailAlreadyExists;
            }
            return UserRepositoryError::NameAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active = UserActiveModel {
            name: Set(data.name),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            ..Default::default()
        };

        let inserted: UserModel = active.insert(&*self.db).await.map_err(Self::map_write_err)?;

        Ok(inserted.to_repository_result())
    }

    async fn update_user(
        &self,
        user_id: i32,
        data: UpdateUserData,
    ) -> Result<UserResult, UserRepositoryError> {
        let existing = UserEntity::find_by_id(user_id)
            .filter(UserColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active = existing.into_active_model();
        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(email) = data.email {
            active.email = Set(email);
        }
        if let Some(password_hash) = data.password_hash {
            active.password_hash = Set(password_hash);
        }

        let updated = active.update(&*self.db).await.map_err(Self::map_write_err)?;

        Ok(updated.to_repository_result())
    }

    async fn soft_delete_user(&self, user_id: i32) -> Result<(), UserRepositoryError> {
        let now = Utc::now().fixed_offset();

        let result = UserEntity::update_many()
            .col_expr(UserColumn::DeletedAt, Expr::value(now))
            .col_expr(UserColumn::UpdatedAt, Expr::value(now))
            .filter(UserColumn::Id.eq(user_id))
            .filter(UserColumn::DeletedAt.is_null())
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }

    async fn soft_delete_all_users(&self) -> Result<u64, UserRepositoryError> {
        let now = Utc::now().fixed_offset();

        let result = UserEntity::update_many()
            .col_expr(UserColumn::DeletedAt, Expr::value(now))
            .col_expr(UserColumn::UpdatedAt, Expr::value(now))
            .filter(UserColumn::DeletedAt.is_null())
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
