use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::group::application::ports::{
    incoming::use_cases::{UpdateGroupCommand, UpdateGroupError},
    outgoing::GroupResult,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{group_name_taken, group_not_found, map_field_error};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateGroupRequest {
    #[schema(example = "platform")]
    pub name: Option<String>,

    /// An empty string clears the description
    pub description: Option<String>,
}

/// Update a group
#[utoipa::path(
    put,
    path = "/api/groups/{group_id}",
    tag = "groups",
    security(("bearer_auth" = [])),
    params(("group_id" = i32, Path, description = "Group id")),
    request_body = UpdateGroupRequest,
    responses(
        (status = 200, description = "Group updated", body = GroupResult),
        (status = 400, description = "Invalid group name", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 409, description = "Group name already in use", body = ErrorResponse),
    )
)]
#[put("/api/groups/{group_id}")]
pub async fn update_group_handler(
    _user: AuthenticatedUser,
    path: web::Path<i32>,
    payload: web::Json<UpdateGroupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let group_id = path.into_inner();
    let dto = payload.into_inner();

    let command = match UpdateGroupCommand::new(group_id, dto.name, dto.description) {
        Ok(cmd) => cmd,
        Err(e) => return map_field_error(e),
    };

    match data.group.update.execute(command).await {
        Ok(group) => ApiResponse::success(group),
        Err(UpdateGroupError::GroupNotFound) => group_not_found(),
        Err(UpdateGroupError::NameAlreadyExists) => group_name_taken(),
        Err(e) => {
            error!(group_id, "Failed to update group: {}", e);
            ApiResponse::internal_error()
        }
    }
}
