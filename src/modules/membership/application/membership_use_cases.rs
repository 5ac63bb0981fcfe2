use std::sync::Arc;

use crate::membership::application::ports::incoming::use_cases::{
    AddMemberUseCase, BulkAddMembersUseCase, BulkRemoveMembersUseCase, CheckMembershipUseCase,
    GetGroupMembersUseCase, GetUserGroupsUseCase, RemoveMemberUseCase,
};

#[derive(Clone)]
pub struct MembershipUseCases {
    pub add: Arc<dyn AddMemberUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveMemberUseCase + Send + Sync>,
    pub group_members: Arc<dyn GetGroupMembersUseCase + Send + Sync>,
    pub user_groups: Arc<dyn GetUserGroupsUseCase + Send + Sync>,
    pub check: Arc<dyn CheckMembershipUseCase + Send + Sync>,
    pub bulk_add: Arc<dyn BulkAddMembersUseCase + Send + Sync>,
    pub bulk_remove: Arc<dyn BulkRemoveMembersUseCase + Send + Sync>,
}
