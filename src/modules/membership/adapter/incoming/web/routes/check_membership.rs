use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::membership::application::ports::incoming::use_cases::MembershipStatus;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Check whether a user is an active member of a group
#[utoipa::path(
    get,
    path = "/api/memberships/users/{user_id}/groups/{group_id}/membership",
    tag = "memberships",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = i32, Path, description = "User id"),
        ("group_id" = i32, Path, description = "Group id"),
    ),
    responses(
        (status = 200, description = "Membership status", body = MembershipStatus),
    )
)]
#[get("/api/memberships/users/{user_id}/groups/{group_id}/membership")]
pub async fn check_membership_handler(
    _user: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (user_id, group_id) = path.into_inner();

    match data.membership.check.execute(user_id, group_id).await {
        Ok(status) => ApiResponse::success(status),
        Err(e) => {
            error!(user_id, group_id, "Failed to check membership: {}", e);
            ApiResponse::internal_error()
        }
    }
}
