use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::{DeleteResponse, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::group::application::ports::incoming::use_cases::DeleteGroupError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::group_not_found;

/// Soft delete a group
#[utoipa::path(
    delete,
    path = "/api/groups/{group_id}",
    tag = "groups",
    security(("bearer_auth" = [])),
    params(("group_id" = i32, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group deleted", body = DeleteResponse),
        (status = 404, description = "Group not found or already deleted", body = ErrorResponse),
    )
)]
#[delete("/api/groups/{group_id}")]
pub async fn delete_group_handler(
    _user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let group_id = path.into_inner();

    match data.group.delete.execute(group_id).await {
        Ok(()) => ApiResponse::success(DeleteResponse::new("Group deleted successfully", 1)),
        Err(DeleteGroupError::GroupNotFound) => group_not_found(),
        Err(e) => {
            error!(group_id, "Failed to delete group: {}", e);
            ApiResponse::internal_error()
        }
    }
}
