use std::sync::Arc;

use crate::user::application::ports::incoming::use_cases::{
    DeleteAllUsersUseCase, DeleteUserUseCase, GetUserUseCase, GetUsersUseCase,
    RegisterUserUseCase, UpdateUserUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetUsersUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetUserUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateUserUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteUserUseCase + Send + Sync>,
    pub delete_all: Arc<dyn DeleteAllUsersUseCase + Send + Sync>,
}
