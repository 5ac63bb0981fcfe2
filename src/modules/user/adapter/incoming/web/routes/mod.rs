mod delete_all_users;
mod delete_user;
mod get_user;
mod get_users;
mod register_user;
mod update_user;

pub use delete_all_users::{delete_all_users_handler, __path_delete_all_users_handler};
pub use delete_user::{delete_user_handler, __path_delete_user_handler};
pub use get_user::{get_user_handler, __path_get_user_handler};
pub use get_users::{get_users_handler, __path_get_users_handler};
pub use register_user::{register_user_handler, __path_register_user_handler, RegisterUserRequest};
pub use update_user::{update_user_handler, __path_update_user_handler, UpdateUserRequest};

use crate::shared::api::ApiResponse;
use crate::user::application::domain::user_policy::UserFieldError;

pub(crate) fn map_field_error(err: UserFieldError) -> actix_web::HttpResponse {
    ApiResponse::bad_request(err.code(), &err.to_string())
}
