use async_trait::async_trait;

/// Login material for an active (not soft-deleted) user.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user_id: i32,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CredentialQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CredentialQuery: Send + Sync {
    async fn find_active_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, CredentialQueryError>;
}
