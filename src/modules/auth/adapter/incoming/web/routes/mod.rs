mod login_user;
mod logout_user;

pub use login_user::{login_user_handler, __path_login_user_handler, LoginRequestDto};
pub use logout_user::{logout_user_handler, __path_logout_user_handler};
