use actix_web::{delete, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::DeleteResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft delete every active user
#[utoipa::path(
    delete,
    path = "/api/users/",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Users deleted", body = DeleteResponse),
    )
)]
#[delete("/api/users/")]
pub async fn delete_all_users_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.user.delete_all.execute().await {
        Ok(count) => {
            warn!(deleted_by = user.user_id, count, "All users soft-deleted");
            ApiResponse::success(DeleteResponse::new(
                format!("Deleted {} users", count),
                count,
            ))
        }
        Err(e) => {
            error!("Failed to delete all users: {}", e);
            ApiResponse::internal_error()
        }
    }
}
