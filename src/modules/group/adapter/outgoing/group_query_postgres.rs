use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::group::application::ports::outgoing::{
    GroupQuery, GroupQueryError, GroupResult,
};

use super::sea_orm_entity::{Column as GroupColumn, Entity as GroupEntity, Model as GroupModel};

#[derive(Debug, Clone)]
pub struct GroupQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GroupQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GroupQuery for GroupQueryPostgres {
    async fn find_active_by_id(
        &self,
        group_id: i32,
    ) -> Result<Option<GroupResult>, GroupQueryError> {
        let model = GroupEntity::find_by_id(group_id)
            .filter(GroupColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(|e| GroupQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_repository_result()))
    }

    async fn find_active_by_name(
        &self,
        name: &str,
    ) -> Result<Option<GroupResult>, GroupQueryError> {
        let model = GroupEntity::find()
            .filter(GroupColumn::Name.eq(name))
            .filter(GroupColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(|e| GroupQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_repository_result()))
    }

    async fn list_active(&self) -> Result<Vec<GroupResult>, GroupQueryError> {
        let models: Vec<GroupModel> = GroupEntity::find()
            .filter(GroupColumn::DeletedAt.is_null())
            .order_by_asc(GroupColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| GroupQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_repository_result()).collect())
    }
}
