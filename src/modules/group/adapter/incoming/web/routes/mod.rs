mod create_group;
mod delete_all_groups;
mod delete_group;
mod get_group;
mod get_groups;
mod update_group;

pub use create_group::{create_group_handler, __path_create_group_handler, CreateGroupRequest};
pub use delete_all_groups::{delete_all_groups_handler, __path_delete_all_groups_handler};
pub use delete_group::{delete_group_handler, __path_delete_group_handler};
pub use get_group::{get_group_handler, __path_get_group_handler};
pub use get_groups::{get_groups_handler, __path_get_groups_handler};
pub use update_group::{update_group_handler, __path_update_group_handler, UpdateGroupRequest};

use crate::group::application::domain::group_policy::GroupFieldError;
use crate::shared::api::ApiResponse;

pub(crate) fn map_field_error(err: GroupFieldError) -> actix_web::HttpResponse {
    ApiResponse::bad_request(err.code(), &err.to_string())
}

pub(crate) fn group_not_found() -> actix_web::HttpResponse {
    ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
}

pub(crate) fn group_name_taken() -> actix_web::HttpResponse {
    ApiResponse::conflict("GROUP_NAME_EXISTS", "Group name is already in use")
}
