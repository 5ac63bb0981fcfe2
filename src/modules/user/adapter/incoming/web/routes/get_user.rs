use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::{incoming::use_cases::GetUserError, outgoing::UserResult};
use crate::AppState;

/// Get one active user
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResult),
        (status = 404, description = "User not found or deleted", body = ErrorResponse),
    )
)]
#[get("/api/users/{user_id}")]
pub async fn get_user_handler(
    _user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.user.get_single.execute(user_id).await {
        Ok(user) => ApiResponse::success(user),
        Err(GetUserError::UserNotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        Err(e) => {
            error!(user_id, "Failed to fetch user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
