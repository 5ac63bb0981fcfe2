use std::sync::Arc;

use crate::group::application::ports::incoming::use_cases::{
    CreateGroupUseCase, DeleteAllGroupsUseCase, DeleteGroupUseCase, GetGroupUseCase,
    GetGroupsUseCase, UpdateGroupUseCase,
};

#[derive(Clone)]
pub struct GroupUseCases {
    pub create: Arc<dyn CreateGroupUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetGroupsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetGroupUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateGroupUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteGroupUseCase + Send + Sync>,
    pub delete_all: Arc<dyn DeleteAllGroupsUseCase + Send + Sync>,
}
