mod login_user_service;

pub use login_user_service::LoginUserService;
