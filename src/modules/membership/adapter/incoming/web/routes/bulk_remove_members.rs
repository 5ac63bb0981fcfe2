use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::membership::application::ports::incoming::use_cases::{
    BulkMembersCommand, BulkRemoveResult,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::BulkMembersRequest;

/// Remove several users from a group
#[utoipa::path(
    post,
    path = "/api/memberships/bulk-remove",
    tag = "memberships",
    security(("bearer_auth" = [])),
    request_body = BulkMembersRequest,
    responses(
        (status = 200, description = "Batch processed", body = BulkRemoveResult),
        (status = 400, description = "Empty user_ids", body = ErrorResponse),
    )
)]
#[post("/api/memberships/bulk-remove")]
pub async fn bulk_remove_members_handler(
    _user: AuthenticatedUser,
    payload: web::Json<BulkMembersRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match BulkMembersCommand::new(dto.group_id, dto.user_ids) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.membership.bulk_remove.execute(command).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!(group_id = dto.group_id, "Bulk remove failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
