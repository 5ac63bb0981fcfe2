use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::auth::application::ports::incoming::use_cases::{
    LoginCommand, LoginError, LoginResult, LoginUserUseCase,
};
use crate::group::application::ports::{
    incoming::use_cases::{
        CreateGroupCommand, CreateGroupError, CreateGroupUseCase, DeleteAllGroupsError,
        DeleteAllGroupsUseCase, DeleteGroupError, DeleteGroupUseCase, GetGroupError,
        GetGroupUseCase, GetGroupsError, GetGroupsUseCase, GroupListResult, UpdateGroupCommand,
        UpdateGroupError, UpdateGroupUseCase,
    },
    outgoing::GroupResult,
};
use crate::membership::application::ports::incoming::use_cases::{
    AddMemberError, AddMemberUseCase, BulkAddMembersError, BulkAddMembersUseCase, BulkAddResult,
    BulkMembersCommand, BulkRemoveMembersError, BulkRemoveMembersUseCase, BulkRemoveResult,
    CheckMembershipError, CheckMembershipUseCase, GetGroupMembersError, GetGroupMembersUseCase,
    GetUserGroupsError, GetUserGroupsUseCase, GroupMembersResult, MembershipStatus,
    RemoveMemberError, RemoveMemberUseCase, UserGroupsResult,
};
use crate::membership::application::ports::outgoing::MembershipResult;
use crate::tests::support::fixtures::{sample_group, sample_membership, sample_user};
use crate::user::application::ports::{
    incoming::use_cases::{
        DeleteAllUsersError, DeleteAllUsersUseCase, DeleteUserError, DeleteUserUseCase,
        GetUserError, GetUserUseCase, GetUsersError, GetUsersUseCase, RegisterUserCommand,
        RegisterUserError, RegisterUserUseCase, UpdateUserCommand, UpdateUserError,
        UpdateUserUseCase, UserListResult,
    },
    outgoing::UserResult,
};

// ──────────────────────────────────────────────────────────
// Auth
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubLoginUserUseCase {
    result: Result<LoginResult, LoginError>,
}

impl StubLoginUserUseCase {
    pub fn success(token: &str) -> Self {
        Self {
            result: Ok(LoginResult::bearer(token.to_string())),
        }
    }

    pub fn failing(error: LoginError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubLoginUserUseCase {
    fn default() -> Self {
        Self::failing(LoginError::InvalidCredentials)
    }
}

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginResult, LoginError> {
        self.result.clone()
    }
}

// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserResult, RegisterUserError> {
        Ok(sample_user(1, command.name()))
    }
}

#[derive(Default, Clone)]
pub struct StubGetUsersUseCase {
    users: Vec<UserResult>,
}

impl StubGetUsersUseCase {
    pub fn with_users(users: Vec<UserResult>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl GetUsersUseCase for StubGetUsersUseCase {
    async fn execute(&self) -> Result<UserListResult, GetUsersError> {
        Ok(UserListResult {
            total: self.users.len(),
            users: self.users.clone(),
        })
    }
}

/// Knows no users.
#[derive(Default, Clone)]
pub struct StubGetUserUseCase;

#[async_trait]
impl GetUserUseCase for StubGetUserUseCase {
    async fn execute(&self, _user_id: i32) -> Result<UserResult, GetUserError> {
        Err(GetUserError::UserNotFound)
    }
}

#[derive(Clone)]
enum UpdateUserBehavior {
    Fail(UpdateUserError),
    Rename,
}

#[derive(Clone)]
pub struct StubUpdateUserUseCase {
    behavior: UpdateUserBehavior,
}

impl StubUpdateUserUseCase {
    pub fn failing(error: UpdateUserError) -> Self {
        Self {
            behavior: UpdateUserBehavior::Fail(error),
        }
    }

    /// Returns the target user carrying the requested name.
    pub fn renaming() -> Self {
        Self {
            behavior: UpdateUserBehavior::Rename,
        }
    }
}

impl Default for StubUpdateUserUseCase {
    fn default() -> Self {
        Self::failing(UpdateUserError::UserNotFound)
    }
}

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(&self, command: UpdateUserCommand) -> Result<UserResult, UpdateUserError> {
        match &self.behavior {
            UpdateUserBehavior::Fail(e) => Err(e.clone()),
            UpdateUserBehavior::Rename => Ok(sample_user(
                command.user_id(),
                command.name().unwrap_or("unchanged"),
            )),
        }
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteUserUseCase {
    succeed: bool,
}

impl StubDeleteUserUseCase {
    pub fn succeeding() -> Self {
        Self { succeed: true }
    }
}

#[async_trait]
impl DeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _user_id: i32) -> Result<(), DeleteUserError> {
        if self.succeed {
            Ok(())
        } else {
            Err(DeleteUserError::UserNotFound)
        }
    }
}

/// Reports the wrapped count as deleted.
#[derive(Default, Clone)]
pub struct StubDeleteAllUsersUseCase(pub u64);

#[async_trait]
impl DeleteAllUsersUseCase for StubDeleteAllUsersUseCase {
    async fn execute(&self) -> Result<u64, DeleteAllUsersError> {
        Ok(self.0)
    }
}

// ──────────────────────────────────────────────────────────
// Groups
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubCreateGroupUseCase {
    duplicate: bool,
}

impl StubCreateGroupUseCase {
    /// Echoes the validated command back as group 1.
    pub fn succeeding() -> Self {
        Self { duplicate: false }
    }

    pub fn duplicate() -> Self {
        Self { duplicate: true }
    }
}

#[async_trait]
impl CreateGroupUseCase for StubCreateGroupUseCase {
    async fn execute(&self, command: CreateGroupCommand) -> Result<GroupResult, CreateGroupError> {
        if self.duplicate {
            return Err(CreateGroupError::NameAlreadyExists);
        }

        let mut group = sample_group(1, command.name());
        group.description = command.description().map(str::to_string);
        Ok(group)
    }
}

#[derive(Default, Clone)]
pub struct StubGetGroupsUseCase;

#[async_trait]
impl GetGroupsUseCase for StubGetGroupsUseCase {
    async fn execute(&self) -> Result<GroupListResult, GetGroupsError> {
        Ok(GroupListResult {
            groups: vec![],
            total: 0,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubGetGroupUseCase {
    groups: Vec<GroupResult>,
}

impl StubGetGroupUseCase {
    pub fn known(groups: Vec<(i32, &str)>) -> Self {
        Self {
            groups: groups
                .into_iter()
                .map(|(id, name)| sample_group(id, name))
                .collect(),
        }
    }
}

#[async_trait]
impl GetGroupUseCase for StubGetGroupUseCase {
    async fn execute(&self, group_id: i32) -> Result<GroupResult, GetGroupError> {
        self.groups
            .iter()
            .find(|g| g.id == group_id)
            .cloned()
            .ok_or(GetGroupError::GroupNotFound)
    }
}

/// Applies updates to the one group it knows; the default knows none.
#[derive(Default, Clone)]
pub struct StubUpdateGroupUseCase {
    group: Option<GroupResult>,
}

impl StubUpdateGroupUseCase {
    pub fn known(group: GroupResult) -> Self {
        Self { group: Some(group) }
    }
}

#[async_trait]
impl UpdateGroupUseCase for StubUpdateGroupUseCase {
    async fn execute(&self, command: UpdateGroupCommand) -> Result<GroupResult, UpdateGroupError> {
        let mut group = self
            .group
            .clone()
            .filter(|g| g.id == command.group_id())
            .ok_or(UpdateGroupError::GroupNotFound)?;

        if let Some(name) = command.name() {
            group.name = name.to_string();
        }
        if let Some(description) = command.description() {
            group.description = description.map(str::to_string);
        }
        Ok(group)
    }
}

/// The default reports every group as missing.
#[derive(Default, Clone)]
pub struct StubDeleteGroupUseCase {
    succeed: bool,
    missing: Vec<i32>,
}

impl StubDeleteGroupUseCase {
    pub fn succeeding() -> Self {
        Self {
            succeed: true,
            missing: vec![],
        }
    }

    /// Deletes every group except the listed ones.
    pub fn missing(ids: Vec<i32>) -> Self {
        Self {
            succeed: true,
            missing: ids,
        }
    }
}

#[async_trait]
impl DeleteGroupUseCase for StubDeleteGroupUseCase {
    async fn execute(&self, group_id: i32) -> Result<(), DeleteGroupError> {
        if self.succeed && !self.missing.contains(&group_id) {
            Ok(())
        } else {
            Err(DeleteGroupError::GroupNotFound)
        }
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteAllGroupsUseCase(pub u64);

#[async_trait]
impl DeleteAllGroupsUseCase for StubDeleteAllGroupsUseCase {
    async fn execute(&self) -> Result<u64, DeleteAllGroupsError> {
        Ok(self.0)
    }
}

// ──────────────────────────────────────────────────────────
// Memberships
// ──────────────────────────────────────────────────────────

/// Active `(group_id, user_id)` pairs shared between clones.
type MemberSet = Arc<Mutex<HashSet<(i32, i32)>>>;

fn member_set(pairs: Vec<(i32, i32)>) -> MemberSet {
    Arc::new(Mutex::new(pairs.into_iter().collect()))
}

/// In-memory add: the first add of a pair succeeds, repeats conflict.
#[derive(Default, Clone)]
pub struct StubAddMemberUseCase {
    members: MemberSet,
    failure: Option<AddMemberError>,
}

impl StubAddMemberUseCase {
    pub fn failing(error: AddMemberError) -> Self {
        Self {
            members: MemberSet::default(),
            failure: Some(error),
        }
    }
}

#[async_trait]
impl AddMemberUseCase for StubAddMemberUseCase {
    async fn execute(
        &self,
        group_id: i32,
        user_id: i32,
    ) -> Result<MembershipResult, AddMemberError> {
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }

        let mut members = self.members.lock().unwrap();
        if !members.insert((group_id, user_id)) {
            return Err(AddMemberError::AlreadyMember);
        }
        Ok(sample_membership(members.len() as i32, user_id, group_id))
    }
}

#[derive(Default, Clone)]
pub struct StubRemoveMemberUseCase {
    members: MemberSet,
}

impl StubRemoveMemberUseCase {
    pub fn with_members(pairs: Vec<(i32, i32)>) -> Self {
        Self {
            members: member_set(pairs),
        }
    }
}

#[async_trait]
impl RemoveMemberUseCase for StubRemoveMemberUseCase {
    async fn execute(&self, group_id: i32, user_id: i32) -> Result<(), RemoveMemberError> {
        if self.members.lock().unwrap().remove(&(group_id, user_id)) {
            Ok(())
        } else {
            Err(RemoveMemberError::MembershipNotFound)
        }
    }
}

/// Always empty; records the last `include_deleted` flag it saw.
#[derive(Default, Clone)]
pub struct StubGetGroupMembersUseCase {
    last_include_deleted: Arc<Mutex<Option<bool>>>,
}

impl StubGetGroupMembersUseCase {
    pub fn last_include_deleted(&self) -> Option<bool> {
        *self.last_include_deleted.lock().unwrap()
    }
}

#[async_trait]
impl GetGroupMembersUseCase for StubGetGroupMembersUseCase {
    async fn execute(
        &self,
        group_id: i32,
        include_deleted: bool,
    ) -> Result<GroupMembersResult, GetGroupMembersError> {
        *self.last_include_deleted.lock().unwrap() = Some(include_deleted);
        Ok(GroupMembersResult {
            group_id,
            members: vec![],
            total_count: 0,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubGetUserGroupsUseCase;

#[async_trait]
impl GetUserGroupsUseCase for StubGetUserGroupsUseCase {
    async fn execute(
        &self,
        user_id: i32,
        _include_deleted: bool,
    ) -> Result<UserGroupsResult, GetUserGroupsError> {
        Ok(UserGroupsResult {
            user_id,
            groups: vec![],
            total_count: 0,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubCheckMembershipUseCase {
    members: Vec<(i32, i32)>,
}

impl StubCheckMembershipUseCase {
    /// Pairs are `(group_id, user_id)`.
    pub fn with_members(members: Vec<(i32, i32)>) -> Self {
        Self { members }
    }
}

#[async_trait]
impl CheckMembershipUseCase for StubCheckMembershipUseCase {
    async fn execute(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<MembershipStatus, CheckMembershipError> {
        Ok(MembershipStatus {
            user_id,
            group_id,
            is_member: self.members.contains(&(group_id, user_id)),
        })
    }
}

/// Users listed in `existing` count as already-member, the rest as added.
#[derive(Default, Clone)]
pub struct StubBulkAddMembersUseCase {
    existing: Vec<i32>,
}

impl StubBulkAddMembersUseCase {
    pub fn with_existing(existing: Vec<i32>) -> Self {
        Self { existing }
    }
}

#[async_trait]
impl BulkAddMembersUseCase for StubBulkAddMembersUseCase {
    async fn execute(
        &self,
        command: BulkMembersCommand,
    ) -> Result<BulkAddResult, BulkAddMembersError> {
        let already = command
            .user_ids()
            .iter()
            .filter(|id| self.existing.contains(id))
            .count();

        Ok(BulkAddResult {
            message: "Bulk member add completed".to_string(),
            group_id: command.group_id(),
            added_count: command.user_ids().len() - already,
            already_member_count: already,
            errors: vec![],
        })
    }
}

/// Users listed in `members` are removed, the rest count as not-member.
#[derive(Default, Clone)]
pub struct StubBulkRemoveMembersUseCase {
    members: Vec<i32>,
}

impl StubBulkRemoveMembersUseCase {
    pub fn with_members(members: Vec<i32>) -> Self {
        Self { members }
    }
}

#[async_trait]
impl BulkRemoveMembersUseCase for StubBulkRemoveMembersUseCase {
    async fn execute(
        &self,
        command: BulkMembersCommand,
    ) -> Result<BulkRemoveResult, BulkRemoveMembersError> {
        let removed = command
            .user_ids()
            .iter()
            .filter(|id| self.members.contains(id))
            .count();

        Ok(BulkRemoveResult {
            message: "Bulk member removal completed".to_string(),
            group_id: command.group_id(),
            removed_count: removed,
            not_member_count: command.user_ids().len() - removed,
            errors: vec![],
        })
    }
}
