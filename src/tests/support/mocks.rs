use async_trait::async_trait;
use mockall::mock;

use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};
use crate::group::application::ports::outgoing::{
    CreateGroupData, GroupQuery, GroupQueryError, GroupRepository, GroupRepositoryError,
    GroupResult, UpdateGroupData,
};
use crate::membership::application::ports::outgoing::{
    GroupMemberView, MembershipQuery, MembershipQueryError, MembershipRepository,
    MembershipRepositoryError, MembershipResult, UserGroupView,
};
use crate::user::application::ports::outgoing::{
    CreateUserData, UpdateUserData, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError, UserResult,
};

// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────

mock! {
    pub UserQuery {}
    #[async_trait]
    impl UserQuery for UserQuery {
        async fn find_active_by_id(&self, user_id: i32) -> Result<Option<UserResult>, UserQueryError>;
        async fn find_active_by_name(&self, name: &str) -> Result<Option<UserResult>, UserQueryError>;
        async fn find_active_by_email(&self, email: &str) -> Result<Option<UserResult>, UserQueryError>;
        async fn list_active(&self) -> Result<Vec<UserResult>, UserQueryError>;
        async fn find_password_hash(&self, user_id: i32) -> Result<Option<String>, UserQueryError>;
    }
}

mock! {
    pub UserRepository {}
    #[async_trait]
    impl UserRepository for UserRepository {
        async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;
        async fn update_user(&self, user_id: i32, data: UpdateUserData) -> Result<UserResult, UserRepositoryError>;
        async fn soft_delete_user(&self, user_id: i32) -> Result<(), UserRepositoryError>;
        async fn soft_delete_all_users(&self) -> Result<u64, UserRepositoryError>;
    }
}

// ──────────────────────────────────────────────────────────
// Groups
// ──────────────────────────────────────────────────────────

mock! {
    pub GroupQuery {}
    #[async_trait]
    impl GroupQuery for GroupQuery {
        async fn find_active_by_id(&self, group_id: i32) -> Result<Option<GroupResult>, GroupQueryError>;
        async fn find_active_by_name(&self, name: &str) -> Result<Option<GroupResult>, GroupQueryError>;
        async fn list_active(&self) -> Result<Vec<GroupResult>, GroupQueryError>;
    }
}

mock! {
    pub GroupRepository {}
    #[async_trait]
    impl GroupRepository for GroupRepository {
        async fn create_group(&self, data: CreateGroupData) -> Result<GroupResult, GroupRepositoryError>;
        async fn update_group(&self, group_id: i32, data: UpdateGroupData) -> Result<GroupResult, GroupRepositoryError>;
        async fn soft_delete_group(&self, group_id: i32) -> Result<(), GroupRepositoryError>;
        async fn soft_delete_all_groups(&self) -> Result<u64, GroupRepositoryError>;
    }
}

// ──────────────────────────────────────────────────────────
// Security
// ──────────────────────────────────────────────────────────

mock! {
    pub PasswordHasher {}
    #[async_trait]
    impl PasswordHasher for PasswordHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError>;
        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
    }
}

// ──────────────────────────────────────────────────────────
// Memberships
// ──────────────────────────────────────────────────────────

mock! {
    pub MembershipQuery {}
    #[async_trait]
    impl MembershipQuery for MembershipQuery {
        async fn find_active(&self, user_id: i32, group_id: i32) -> Result<Option<MembershipResult>, MembershipQueryError>;
        async fn list_group_members(&self, group_id: i32, include_deleted: bool) -> Result<Vec<GroupMemberView>, MembershipQueryError>;
        async fn list_user_groups(&self, user_id: i32, include_deleted: bool) -> Result<Vec<UserGroupView>, MembershipQueryError>;
        async fn group_is_active(&self, group_id: i32) -> Result<bool, MembershipQueryError>;
        async fn user_is_active(&self, user_id: i32) -> Result<bool, MembershipQueryError>;
    }
}

mock! {
    pub MembershipRepository {}
    #[async_trait]
    impl MembershipRepository for MembershipRepository {
        async fn create_membership(&self, user_id: i32, group_id: i32) -> Result<MembershipResult, MembershipRepositoryError>;
        async fn soft_delete_active(&self, user_id: i32, group_id: i32) -> Result<(), MembershipRepositoryError>;
    }
}
