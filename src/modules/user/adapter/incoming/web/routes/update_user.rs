use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::{
    incoming::use_cases::{UpdateUserCommand, UpdateUserCommandError, UpdateUserError},
    outgoing::UserResult,
};
use crate::AppState;

use super::map_field_error;

/// Every field is optional; omitted fields keep their value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "alicia")]
    pub name: Option<String>,

    #[schema(example = "alicia@example.com")]
    pub email: Option<String>,

    /// Required when `new_password` is set
    pub current_password: Option<String>,

    pub new_password: Option<String>,
}

/// Update a user
#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("user_id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResult),
        (status = 400, description = "Validation failed or wrong current password", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Name or email already in use", body = ErrorResponse),
    )
)]
#[put("/api/users/{user_id}")]
pub async fn update_user_handler(
    _user: AuthenticatedUser,
    path: web::Path<i32>,
    payload: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    let dto = payload.into_inner();

    let command = match UpdateUserCommand::new(
        user_id,
        dto.name,
        dto.email,
        dto.current_password,
        dto.new_password,
    ) {
        Ok(cmd) => cmd,
        Err(UpdateUserCommandError::InvalidField(e)) => return map_field_error(e),
        Err(e @ UpdateUserCommandError::CurrentPasswordRequired) => {
            return ApiResponse::bad_request("CURRENT_PASSWORD_REQUIRED", &e.to_string())
        }
    };

    match data.user.update.execute(command).await {
        Ok(user) => ApiResponse::success(user),
        Err(UpdateUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateUserError::NameAlreadyExists) => {
            ApiResponse::conflict("NAME_ALREADY_EXISTS", "User name is already in use")
        }
        Err(UpdateUserError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }
        Err(UpdateUserError::InvalidCurrentPassword) => {
            ApiResponse::bad_request("INVALID_CURRENT_PASSWORD", "Current password is incorrect")
        }
        Err(e) => {
            error!(user_id, "Failed to update user: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        auth_helper::{bearer, token_provider_data},
        read_json,
        stubs::StubUpdateUserUseCase,
    };

    #[actix_web::test]
    async fn new_password_without_current_is_bad_request() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(update_user_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/users/1")
            .insert_header(bearer())
            .set_json(serde_json::json!({ "new_password": "brand-new-pass" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = read_json(resp).await;
        assert_eq!(json["code"], "CURRENT_PASSWORD_REQUIRED");
    }

    #[actix_web::test]
    async fn taken_name_is_conflict() {
        let state = TestAppStateBuilder::default()
            .with_update_user(StubUpdateUserUseCase::failing(UpdateUserError::NameAlreadyExists))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(update_user_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/users/1")
            .insert_header(bearer())
            .set_json(serde_json::json!({ "name": "bob" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn update_returns_user() {
        let state = TestAppStateBuilder::default()
            .with_update_user(StubUpdateUserUseCase::renaming())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(update_user_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/users/9")
            .insert_header(bearer())
            .set_json(serde_json::json!({ "name": "zelda" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["id"], 9);
        assert_eq!(json["name"], "zelda");
    }
}
