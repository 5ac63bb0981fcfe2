mod delete_all_users_use_case;
mod delete_user_use_case;
mod get_user_use_case;
mod get_users_use_case;
mod register_user_use_case;
mod update_user_use_case;

pub use delete_all_users_use_case::{DeleteAllUsersError, DeleteAllUsersUseCase};
pub use delete_user_use_case::{DeleteUserError, DeleteUserUseCase};
pub use get_user_use_case::{GetUserError, GetUserUseCase};
pub use get_users_use_case::{GetUsersError, GetUsersUseCase, UserListResult};
pub use register_user_use_case::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase};
pub use update_user_use_case::{
    PasswordChange, UpdateUserCommand, UpdateUserCommandError, UpdateUserError, UpdateUserUseCase,
};
