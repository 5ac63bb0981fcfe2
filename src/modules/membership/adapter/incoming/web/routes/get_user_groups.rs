use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::IncludeDeletedQuery;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::membership::application::ports::incoming::use_cases::UserGroupsResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the groups a user belongs to
#[utoipa::path(
    get,
    path = "/api/memberships/users/{user_id}/groups",
    tag = "memberships",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = i32, Path, description = "User id"),
        IncludeDeletedQuery,
    ),
    responses(
        (status = 200, description = "Groups of the user", body = UserGroupsResult),
    )
)]
#[get("/api/memberships/users/{user_id}/groups")]
pub async fn get_user_groups_handler(
    _user: AuthenticatedUser,
    path: web::Path<i32>,
    query: web::Query<IncludeDeletedQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data
        .membership
        .user_groups
        .execute(user_id, query.include_deleted)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!(user_id, "Failed to list user groups: {}", e);
            ApiResponse::internal_error()
        }
    }
}
