use actix_web::{post, Responder};
use tracing::info;

use crate::api::schemas::MessageResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;

/// User logout
///
/// Tokens are stateless; the client is expected to discard its token.
/// A bearer header is accepted but not required.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(user: Option<AuthenticatedUser>) -> impl Responder {
    if let Some(user) = user {
        info!(user_id = user.user_id, "User logged out");
    }

    ApiResponse::success(MessageResponse::new("Successfully logged out"))
}
