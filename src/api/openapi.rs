use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{DeleteResponse, ErrorResponse, MessageResponse};

// Auth
use crate::auth::adapter::incoming::web::routes::LoginRequestDto;
use crate::auth::application::ports::incoming::use_cases::LoginResult;

// Users
use crate::user::adapter::incoming::web::routes::{RegisterUserRequest, UpdateUserRequest};
use crate::user::application::ports::{
    incoming::use_cases::UserListResult, outgoing::UserResult,
};

// Groups
use crate::group::adapter::incoming::web::routes::{CreateGroupRequest, UpdateGroupRequest};
use crate::group::application::ports::{
    incoming::use_cases::GroupListResult, outgoing::GroupResult,
};

// Memberships
use crate::membership::adapter::incoming::web::routes::{AddMemberRequest, BulkMembersRequest};
use crate::membership::application::ports::{
    incoming::use_cases::{
        BulkAddResult, BulkRemoveResult, GroupMembersResult, MembershipStatus, UserGroupsResult,
    },
    outgoing::{GroupMemberView, MembershipResult, UserGroupView},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Membership Administration API",
        version = "1.0.0",
        description = "Users, groups and the memberships between them"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,

        // User endpoints
        crate::user::adapter::incoming::web::routes::register_user_handler,
        crate::user::adapter::incoming::web::routes::get_users_handler,
        crate::user::adapter::incoming::web::routes::get_user_handler,
        crate::user::adapter::incoming::web::routes::update_user_handler,
        crate::user::adapter::incoming::web::routes::delete_user_handler,
        crate::user::adapter::incoming::web::routes::delete_all_users_handler,

        // Group endpoints
        crate::group::adapter::incoming::web::routes::create_group_handler,
        crate::group::adapter::incoming::web::routes::get_groups_handler,
        crate::group::adapter::incoming::web::routes::get_group_handler,
        crate::group::adapter::incoming::web::routes::update_group_handler,
        crate::group::adapter::incoming::web::routes::delete_group_handler,
        crate::group::adapter::incoming::web::routes::delete_all_groups_handler,

        // Membership endpoints
        crate::membership::adapter::incoming::web::routes::add_member_handler,
        crate::membership::adapter::incoming::web::routes::remove_member_handler,
        crate::membership::adapter::incoming::web::routes::get_group_members_handler,
        crate::membership::adapter::incoming::web::routes::get_user_groups_handler,
        crate::membership::adapter::incoming::web::routes::check_membership_handler,
        crate::membership::adapter::incoming::web::routes::bulk_add_members_handler,
        crate::membership::adapter::incoming::web::routes::bulk_remove_members_handler,
    ),
    components(
        schemas(
            // Shared bodies
            ErrorResponse,
            MessageResponse,
            DeleteResponse,

            // Auth DTOs
            LoginRequestDto,
            LoginResult,

            // User DTOs
            RegisterUserRequest,
            UpdateUserRequest,
            UserResult,
            UserListResult,

            // Group DTOs
            CreateGroupRequest,
            UpdateGroupRequest,
            GroupResult,
            GroupListResult,

            // Membership DTOs
            AddMemberRequest,
            BulkMembersRequest,
            MembershipResult,
            GroupMemberView,
            UserGroupView,
            GroupMembersResult,
            UserGroupsResult,
            MembershipStatus,
            BulkAddResult,
            BulkRemoveResult
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User management endpoints"),
        (name = "groups", description = "Group management endpoints"),
        (name = "memberships", description = "Group membership endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
