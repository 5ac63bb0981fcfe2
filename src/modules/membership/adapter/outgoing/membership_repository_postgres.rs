use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::membership::application::ports::outgoing::{
    MembershipRepository, MembershipRepositoryError, MembershipResult,
};
use crate::shared::persistence::is_unique_violation;

use super::sea_orm_entity::{
    ActiveModel as MembershipActiveModel, Column as MembershipColumn,
    Entity as MembershipEntity, Model as MembershipModel,
};

#[derive(Debug, Clone)]
pub struct MembershipRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MembershipRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> MembershipRepositoryError {
        // idx_memberships_user_group_active
        if is_unique_violation(&e) {
            return MembershipRepositoryError::AlreadyMember;
        }
        MembershipRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl MembershipRepository for MembershipRepositoryPostgres {
    async fn create_membership(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<MembershipResult, MembershipRepositoryError> {
        let active = MembershipActiveModel {
            user_id: Set(user_id),
            group_id: Set(group_id),
            ..Default::default()
        };

        let inserted: MembershipModel = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.to_repository_result())
    }

    async fn soft_delete_active(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<(), MembershipRepositoryError> {
        let now = Utc::now().fixed_offset();

        let result = MembershipEntity::update_many()
            .col_expr(MembershipColumn::DeletedAt, Expr::value(now))
            .col_expr(MembershipColumn::UpdatedAt, Expr::value(now))
            .filter(MembershipColumn::UserId.eq(user_id))
            .filter(MembershipColumn::GroupId.eq(group_id))
            .filter(MembershipColumn::DeletedAt.is_null())
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(MembershipRepositoryError::MembershipNotFound);
        }

        Ok(())
    }
}
