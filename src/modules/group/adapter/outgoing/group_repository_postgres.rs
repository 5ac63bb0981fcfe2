use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::group::application::ports::outgoing::{
    CreateGroupData, GroupRepository, GroupRepositoryError, GroupResult, UpdateGroupData,
};
use crate::shared::persistence::is_unique_violation;

use super::sea_orm_entity::{
    ActiveModel as GroupActiveModel, Column as GroupColumn, Entity as GroupEntity,
    Model as GroupModel,
};

#[derive(Debug, Clone)]
pub struct GroupRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GroupRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_err(e: DbErr) -> GroupRepositoryError {
        if is_unique_violation(&e) {
            return GroupRepositoryError::NameAlreadyExists;
        }
        GroupRepositoryError::DatabaseError(e.to_string())
    }

    async fn mark_deleted(
        &self,
        group_id: Option<i32>,
    ) -> Result<u64, GroupRepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut update = GroupEntity::update_many()
            .col_expr(GroupColumn::DeletedAt, Expr::value(now))
            .col_expr(GroupColumn::UpdatedAt, Expr::value(now))
            .filter(GroupColumn::DeletedAt.is_null());
        if let Some(id) = group_id {
            update = update.filter(GroupColumn::Id.eq(id));
        }

        let result = update
            .exec(&*self.db)
            .await
            .map_err(|e| GroupRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl GroupRepository for GroupRepositoryPostgres {
    async fn create_group(
        &self,
        data: CreateGroupData,
    ) -> Result<GroupResult, GroupRepositoryError> {
        let active = GroupActiveModel {
            name: Set(data.name),
            description: Set(data.description),
            ..Default::default()
        };

        let inserted: GroupModel = active.insert(&*self.db).await.map_err(Self::map_write_err)?;

        Ok(inserted.to_repository_result())
    }

    async fn update_group(
        &self,
        group_id: i32,
        data: UpdateGroupData,
    ) -> Result<GroupResult, GroupRepositoryError> {
        let existing = GroupEntity::find_by_id(group_id)
            .filter(GroupColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(|e| GroupRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(GroupRepositoryError::GroupNotFound)?;

        let mut active = existing.into_active_model();
        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(description) = data.description {
            active.description = Set(description);
        }

        let updated = active.update(&*self.db).await.map_err(Self::map_write_err)?;

        Ok(updated.to_repository_result())
    }

    async fn soft_delete_group(&self, group_id: i32) -> Result<(), GroupRepositoryError> {
        if self.mark_deleted(Some(group_id)).await? == 0 {
            return Err(GroupRepositoryError::GroupNotFound);
        }
        Ok(())
    }

    async fn soft_delete_all_groups(&self) -> Result<u64, GroupRepositoryError> {
        self.mark_deleted(None).await
    }
}
