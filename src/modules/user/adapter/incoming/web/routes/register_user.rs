use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::{
    incoming::use_cases::{RegisterUserCommand, RegisterUserError},
    outgoing::UserResult,
};
use crate::AppState;

use super::map_field_error;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// 3 to 50 characters
    #[schema(example = "alice")]
    pub name: String,

    #[schema(example = "alice@example.com")]
    pub email: String,

    /// At least 8 characters
    #[schema(example = "P@ssw0rd")]
    pub password: String,
}

/// Register a user
///
/// Open endpoint; no bearer token required.
#[utoipa::path(
    post,
    path = "/api/users/",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResult),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Name or email already in use", body = ErrorResponse),
    )
)]
#[post("/api/users/")]
pub async fn register_user_handler(
    payload: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match RegisterUserCommand::new(dto.name, dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(err) => return map_field_error(err),
    };

    match data.user.register.execute(command).await {
        Ok(user) => ApiResponse::created(user),
        Err(RegisterUserError::NameAlreadyExists) => {
            ApiResponse::conflict("NAME_ALREADY_EXISTS", "User name is already in use")
        }
        Err(RegisterUserError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }
        Err(e) => {
            error!("Failed to register user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
