use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::group::application::ports::{incoming::use_cases::GetGroupError, outgoing::GroupResult};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::group_not_found;

/// Get one active group
#[utoipa::path(
    get,
    path = "/api/groups/{group_id}",
    tag = "groups",
    security(("bearer_auth" = [])),
    params(("group_id" = i32, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group found", body = GroupResult),
        (status = 404, description = "Group not found or deleted", body = ErrorResponse),
    )
)]
#[get("/api/groups/{group_id}")]
pub async fn get_group_handler(
    _user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let group_id = path.into_inner();

    match data.group.get_single.execute(group_id).await {
        Ok(group) => ApiResponse::success(group),
        Err(GetGroupError::GroupNotFound) => group_not_found(),
        Err(e) => {
            error!(group_id, "Failed to fetch group: {}", e);
            ApiResponse::internal_error()
        }
    }
}
