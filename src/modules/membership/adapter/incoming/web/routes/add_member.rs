use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::membership::application::ports::{
    incoming::use_cases::AddMemberError, outgoing::MembershipResult,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddMemberRequest {
    #[schema(example = 3)]
    pub user_id: i32,

    #[schema(example = 1)]
    pub group_id: i32,
}

/// Add a user to a group
#[utoipa::path(
    post,
    path = "/api/memberships/",
    tag = "memberships",
    security(("bearer_auth" = [])),
    request_body = AddMemberRequest,
    responses(
        (status = 201, description = "Membership created", body = MembershipResult),
        (status = 404, description = "Group or user not found", body = ErrorResponse),
        (status = 409, description = "User is already an active member", body = ErrorResponse),
    )
)]
#[post("/api/memberships/")]
pub async fn add_member_handler(
    _user: AuthenticatedUser,
    payload: web::Json<AddMemberRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let AddMemberRequest { user_id, group_id } = payload.into_inner();

    match data.membership.add.execute(group_id, user_id).await {
        Ok(membership) => ApiResponse::created(membership),
        Err(e @ AddMemberError::GroupNotFound(_)) => {
            ApiResponse::not_found("GROUP_NOT_FOUND", &e.to_string())
        }
        Err(e @ AddMemberError::UserNotFound(_)) => {
            ApiResponse::not_found("USER_NOT_FOUND", &e.to_string())
        }
        Err(e @ AddMemberError::AlreadyMember) => {
            ApiResponse::conflict("ALREADY_MEMBER", &e.to_string())
        }
        Err(e) => {
            error!(group_id, user_id, "Failed to add member: {}", e);
            ApiResponse::internal_error()
        }
    }
}
