use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::LoginUserUseCase;
use crate::group::application::{
    group_use_cases::GroupUseCases,
    ports::incoming::use_cases::{
        CreateGroupUseCase, DeleteGroupUseCase, GetGroupUseCase, UpdateGroupUseCase,
    },
};
use crate::membership::application::{
    membership_use_cases::MembershipUseCases,
    ports::incoming::use_cases::{
        AddMemberUseCase, BulkAddMembersUseCase, BulkRemoveMembersUseCase, CheckMembershipUseCase,
        GetGroupMembersUseCase, RemoveMemberUseCase,
    },
};
use crate::tests::support::stubs::*;
use crate::user::application::{
    ports::incoming::use_cases::{
        DeleteAllUsersUseCase, DeleteUserUseCase, GetUsersUseCase, RegisterUserUseCase,
        UpdateUserUseCase,
    },
    user_use_cases::UserUseCases,
};
use crate::AppState;

/// Every use case starts as a stub; tests swap in the ones they exercise.
pub struct TestAppStateBuilder {
    user: UserUseCases,
    group: GroupUseCases,
    membership: MembershipUseCases,
    login_user: Arc<dyn LoginUserUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            user: UserUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                get_list: Arc::new(StubGetUsersUseCase::default()),
                get_single: Arc::new(StubGetUserUseCase),
                update: Arc::new(StubUpdateUserUseCase::default()),
                delete: Arc::new(StubDeleteUserUseCase::default()),
                delete_all: Arc::new(StubDeleteAllUsersUseCase::default()),
            },
            group: GroupUseCases {
                create: Arc::new(StubCreateGroupUseCase::succeeding()),
                get_list: Arc::new(StubGetGroupsUseCase),
                get_single: Arc::new(StubGetGroupUseCase::default()),
                update: Arc::new(StubUpdateGroupUseCase::default()),
                delete: Arc::new(StubDeleteGroupUseCase::default()),
                delete_all: Arc::new(StubDeleteAllGroupsUseCase::default()),
            },
            membership: MembershipUseCases {
                add: Arc::new(StubAddMemberUseCase::default()),
                remove: Arc::new(StubRemoveMemberUseCase::default()),
                group_members: Arc::new(StubGetGroupMembersUseCase::default()),
                user_groups: Arc::new(StubGetUserGroupsUseCase),
                check: Arc::new(StubCheckMembershipUseCase::default()),
                bulk_add: Arc::new(StubBulkAddMembersUseCase::default()),
                bulk_remove: Arc::new(StubBulkRemoveMembersUseCase::default()),
            },
            login_user: Arc::new(StubLoginUserUseCase::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_register_user(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.user.register = Arc::new(uc);
        self
    }

    pub fn with_get_users(mut self, uc: impl GetUsersUseCase + 'static) -> Self {
        self.user.get_list = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl UpdateUserUseCase + 'static) -> Self {
        self.user.update = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + 'static) -> Self {
        self.user.delete = Arc::new(uc);
        self
    }

    pub fn with_delete_all_users(mut self, uc: impl DeleteAllUsersUseCase + 'static) -> Self {
        self.user.delete_all = Arc::new(uc);
        self
    }

    pub fn with_create_group(mut self, uc: impl CreateGroupUseCase + 'static) -> Self {
        self.group.create = Arc::new(uc);
        self
    }

    pub fn with_get_group(mut self, uc: impl GetGroupUseCase + 'static) -> Self {
        self.group.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_group(mut self, uc: impl UpdateGroupUseCase + 'static) -> Self {
        self.group.update = Arc::new(uc);
        self
    }

    pub fn with_delete_group(mut self, uc: impl DeleteGroupUseCase + 'static) -> Self {
        self.group.delete = Arc::new(uc);
        self
    }

    pub fn with_add_member(mut self, uc: impl AddMemberUseCase + 'static) -> Self {
        self.membership.add = Arc::new(uc);
        self
    }

    pub fn with_remove_member(mut self, uc: impl RemoveMemberUseCase + 'static) -> Self {
        self.membership.remove = Arc::new(uc);
        self
    }

    pub fn with_group_members(mut self, uc: impl GetGroupMembersUseCase + 'static) -> Self {
        self.membership.group_members = Arc::new(uc);
        self
    }

    pub fn with_check_membership(mut self, uc: impl CheckMembershipUseCase + 'static) -> Self {
        self.membership.check = Arc::new(uc);
        self
    }

    pub fn with_bulk_add(mut self, uc: impl BulkAddMembersUseCase + 'static) -> Self {
        self.membership.bulk_add = Arc::new(uc);
        self
    }

    pub fn with_bulk_remove(mut self, uc: impl BulkRemoveMembersUseCase + 'static) -> Self {
        self.membership.bulk_remove = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            user: self.user,
            group: self.group,
            membership: self.membership,
            login_user_use_case: self.login_user,
        })
    }
}
