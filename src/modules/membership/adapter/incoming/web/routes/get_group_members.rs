use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::IncludeDeletedQuery;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::membership::application::ports::incoming::use_cases::GroupMembersResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the members of a group
///
/// Unknown groups return an empty list.
#[utoipa::path(
    get,
    path = "/api/memberships/groups/{group_id}/members",
    tag = "memberships",
    security(("bearer_auth" = [])),
    params(
        ("group_id" = i32, Path, description = "Group id"),
        IncludeDeletedQuery,
    ),
    responses(
        (status = 200, description = "Group members", body = GroupMembersResult),
    )
)]
#[get("/api/memberships/groups/{group_id}/members")]
pub async fn get_group_members_handler(
    _user: AuthenticatedUser,
    path: web::Path<i32>,
    query: web::Query<IncludeDeletedQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let group_id = path.into_inner();

    match data
        .membership
        .group_members
        .execute(group_id, query.include_deleted)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!(group_id, "Failed to list group members: {}", e);
            ApiResponse::internal_error()
        }
    }
}
