use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{DeleteResponse, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::DeleteUserError;
use crate::AppState;

/// Soft delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = DeleteResponse),
        (status = 404, description = "User not found or already deleted", body = ErrorResponse),
    )
)]
#[delete("/api/users/{user_id}")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.user.delete.execute(user_id).await {
        Ok(()) => {
            info!(user_id, deleted_by = user.user_id, "User soft-deleted");
            ApiResponse::success(DeleteResponse::new("User deleted successfully", 1))
        }
        Err(DeleteUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e) => {
            error!(user_id, "Failed to delete user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
