pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{admin_client, auth, group, membership, user};

use actix_web::web;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::auth::{
    adapter::outgoing::CredentialQueryPostgres,
    application::{
        ports::{
            incoming::use_cases::LoginUserUseCase,
            outgoing::{PasswordHasher, TokenProvider},
        },
        services::LoginUserService,
    },
};
use crate::group::{
    adapter::outgoing::{GroupQueryPostgres, GroupRepositoryPostgres},
    application::{group_use_cases::GroupUseCases, services as group_services},
};
use crate::membership::{
    adapter::outgoing::{MembershipQueryPostgres, MembershipRepositoryPostgres},
    application::{membership_use_cases::MembershipUseCases, services as membership_services},
};
use crate::user::{
    adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres},
    application::{services as user_services, user_use_cases::UserUseCases},
};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub user: UserUseCases,
    pub group: GroupUseCases,
    pub membership: MembershipUseCases,
    pub login_user_use_case: Arc<dyn LoginUserUseCase + Send + Sync>,
}

impl AppState {
    /// Wires every use case to its Postgres adapters.
    pub fn build(
        db: Arc<DatabaseConnection>,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        let user_query = UserQueryPostgres::new(Arc::clone(&db));
        let user_repo = UserRepositoryPostgres::new(Arc::clone(&db));
        let group_query = GroupQueryPostgres::new(Arc::clone(&db));
        let group_repo = GroupRepositoryPostgres::new(Arc::clone(&db));
        let membership_query = MembershipQueryPostgres::new(Arc::clone(&db));
        let membership_repo = MembershipRepositoryPostgres::new(Arc::clone(&db));

        let user = UserUseCases {
            register: Arc::new(user_services::RegisterUserService::new(
                user_query.clone(),
                user_repo.clone(),
                Arc::clone(&hasher),
            )),
            get_list: Arc::new(user_services::GetUsersService::new(user_query.clone())),
            get_single: Arc::new(user_services::GetUserService::new(user_query.clone())),
            update: Arc::new(user_services::UpdateUserService::new(
                user_query,
                user_repo.clone(),
                Arc::clone(&hasher),
            )),
            delete: Arc::new(user_services::DeleteUserService::new(user_repo.clone())),
            delete_all: Arc::new(user_services::DeleteAllUsersService::new(user_repo)),
        };

        let group = GroupUseCases {
            create: Arc::new(group_services::CreateGroupService::new(
                group_query.clone(),
                group_repo.clone(),
            )),
            get_list: Arc::new(group_services::GetGroupsService::new(group_query.clone())),
            get_single: Arc::new(group_services::GetGroupService::new(group_query.clone())),
            update: Arc::new(group_services::UpdateGroupService::new(
                group_query,
                group_repo.clone(),
            )),
            delete: Arc::new(group_services::DeleteGroupService::new(group_repo.clone())),
            delete_all: Arc::new(group_services::DeleteAllGroupsService::new(group_repo)),
        };

        let membership = MembershipUseCases {
            add: Arc::new(membership_services::AddMemberService::new(
                membership_query.clone(),
                membership_repo.clone(),
            )),
            remove: Arc::new(membership_services::RemoveMemberService::new(
                membership_repo.clone(),
            )),
            group_members: Arc::new(membership_services::GetGroupMembersService::new(
                membership_query.clone(),
            )),
            user_groups: Arc::new(membership_services::GetUserGroupsService::new(
                membership_query.clone(),
            )),
            check: Arc::new(membership_services::CheckMembershipService::new(
                membership_query.clone(),
            )),
            bulk_add: Arc::new(membership_services::BulkAddMembersService::new(
                membership_query,
                membership_repo.clone(),
            )),
            bulk_remove: Arc::new(membership_services::BulkRemoveMembersService::new(
                membership_repo,
            )),
        };

        let login_user_use_case = Arc::new(LoginUserService::new(
            CredentialQueryPostgres::new(db),
            hasher,
            tokens,
        ));

        Self {
            user,
            group,
            membership,
            login_user_use_case,
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Service
    cfg.service(crate::health::root);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    // Users
    cfg.service(crate::user::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_users_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::delete_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::delete_all_users_handler);
    // Groups
    cfg.service(crate::group::adapter::incoming::web::routes::get_groups_handler);
    cfg.service(crate::group::adapter::incoming::web::routes::create_group_handler);
    cfg.service(crate::group::adapter::incoming::web::routes::get_group_handler);
    cfg.service(crate::group::adapter::incoming::web::routes::update_group_handler);
    cfg.service(crate::group::adapter::incoming::web::routes::delete_group_handler);
    cfg.service(crate::group::adapter::incoming::web::routes::delete_all_groups_handler);
    // Memberships
    cfg.service(crate::membership::adapter::incoming::web::routes::get_group_members_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::get_user_groups_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::check_membership_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::add_member_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::remove_member_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::bulk_add_members_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::bulk_remove_members_handler);
}
