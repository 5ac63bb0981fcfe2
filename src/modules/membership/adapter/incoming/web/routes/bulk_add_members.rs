use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::membership::application::ports::incoming::use_cases::{
    BulkAddMembersError, BulkAddResult, BulkMembersCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Shared by bulk add and bulk remove
#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkMembersRequest {
    #[schema(example = 1)]
    pub group_id: i32,

    /// Must not be empty
    #[schema(example = json!([3, 4]))]
    pub user_ids: Vec<i32>,
}

/// Add several users to a group
///
/// Items are processed one by one; per-user failures are listed in `errors`.
#[utoipa::path(
    post,
    path = "/api/memberships/bulk-add",
    tag = "memberships",
    security(("bearer_auth" = [])),
    request_body = BulkMembersRequest,
    responses(
        (status = 201, description = "Batch processed", body = BulkAddResult),
        (status = 400, description = "Empty user_ids", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
    )
)]
#[post("/api/memberships/bulk-add")]
pub async fn bulk_add_members_handler(
    _user: AuthenticatedUser,
    payload: web::Json<BulkMembersRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match BulkMembersCommand::new(dto.group_id, dto.user_ids) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.membership.bulk_add.execute(command).await {
        Ok(result) => ApiResponse::created(result),
        Err(e @ BulkAddMembersError::GroupNotFound(_)) => {
            ApiResponse::not_found("GROUP_NOT_FOUND", &e.to_string())
        }
        Err(e) => {
            error!(group_id = dto.group_id, "Bulk add failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
