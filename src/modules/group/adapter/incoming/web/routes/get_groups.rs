use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::group::application::ports::incoming::use_cases::GroupListResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List active groups
#[utoipa::path(
    get,
    path = "/api/groups/",
    tag = "groups",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active groups", body = GroupListResult),
    )
)]
#[get("/api/groups/")]
pub async fn get_groups_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.group.get_list.execute().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => {
            error!("Failed to list groups: {}", e);
            ApiResponse::internal_error()
        }
    }
}
