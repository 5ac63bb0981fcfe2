use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::group::application::ports::{
    incoming::use_cases::{CreateGroupCommand, CreateGroupError},
    outgoing::GroupResult,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{group_name_taken, map_field_error};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    #[schema(example = "engineering")]
    pub name: String,

    #[schema(example = "Backend and platform engineers")]
    pub description: Option<String>,
}

/// Create a group
#[utoipa::path(
    post,
    path = "/api/groups/",
    tag = "groups",
    security(("bearer_auth" = [])),
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created", body = GroupResult),
        (status = 400, description = "Invalid group name", body = ErrorResponse),
        (status = 409, description = "Group name already in use", body = ErrorResponse),
    )
)]
#[post("/api/groups/")]
pub async fn create_group_handler(
    _user: AuthenticatedUser,
    payload: web::Json<CreateGroupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match CreateGroupCommand::new(dto.name, dto.description) {
        Ok(cmd) => cmd,
        Err(e) => return map_field_error(e),
    };

    match data.group.create.execute(command).await {
        Ok(group) => ApiResponse::created(group),
        Err(CreateGroupError::NameAlreadyExists) => group_name_taken(),
        Err(e) => {
            error!("Failed to create group: {}", e);
            ApiResponse::internal_error()
        }
    }
}
