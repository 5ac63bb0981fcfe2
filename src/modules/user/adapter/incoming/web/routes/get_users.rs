use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::UserListResult;
use crate::AppState;

/// List active users
#[utoipa::path(
    get,
    path = "/api/users/",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active users", body = UserListResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/users/")]
pub async fn get_users_handler(_user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.user.get_list.execute().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => {
            error!("Failed to list users: {}", e);
            ApiResponse::internal_error()
        }
    }
}
