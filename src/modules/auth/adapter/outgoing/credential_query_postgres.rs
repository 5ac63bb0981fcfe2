use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    CredentialQuery, CredentialQueryError, UserCredentials,
};
use crate::user::adapter::outgoing::sea_orm_entity::{Column as UserColumn, Entity as UserEntity};

/// Reads login material straight from the users table.
#[derive(Debug, Clone)]
pub struct CredentialQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CredentialQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialQuery for CredentialQueryPostgres {
    async fn find_active_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, CredentialQueryError> {
        let model = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .filter(UserColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(|e| CredentialQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| UserCredentials {
            user_id: m.id,
            email: m.email,
            password_hash: m.password_hash,
        }))
    }
}
