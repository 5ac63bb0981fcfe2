use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::ports::incoming::use_cases::{LoginCommand, LoginError, LoginResult};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "alice@example.com")]
    pub email: String,

    #[schema(example = "password123")]
    pub password: String,
}

/// User login
///
/// Exchanges email and password for a short-lived bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResult),
        (status = 400, description = "Malformed credentials", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "detail": "Invalid email or password",
                "code": "INVALID_CREDENTIALS"
            })
        ),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    payload: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match LoginCommand::new(dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_user_use_case.execute(command).await {
        Ok(result) => {
            info!("Login succeeded");
            ApiResponse::success(result)
        }
        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(e) => {
            error!("Login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
