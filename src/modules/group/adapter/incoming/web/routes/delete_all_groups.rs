use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::DeleteResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft delete every active group
#[utoipa::path(
    delete,
    path = "/api/groups/",
    tag = "groups",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Groups deleted", body = DeleteResponse),
    )
)]
#[delete("/api/groups/")]
pub async fn delete_all_groups_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.group.delete_all.execute().await {
        Ok(count) => ApiResponse::success(DeleteResponse::new(
            format!("Deleted {} groups", count),
            count,
        )),
        Err(e) => {
            error!("Failed to delete all groups: {}", e);
            ApiResponse::internal_error()
        }
    }
}
