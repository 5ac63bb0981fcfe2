mod add_member_use_case;
mod bulk_add_members_use_case;
mod bulk_members_command;
mod bulk_remove_members_use_case;
mod check_membership_use_case;
mod get_group_members_use_case;
mod get_user_groups_use_case;
mod remove_member_use_case;

pub use add_member_use_case::{AddMemberError, AddMemberUseCase};
pub use bulk_add_members_use_case::{BulkAddMembersError, BulkAddMembersUseCase, BulkAddResult};
pub use bulk_members_command::{BulkMembersCommand, BulkMembersCommandError};
pub use bulk_remove_members_use_case::{
    BulkRemoveMembersError, BulkRemoveMembersUseCase, BulkRemoveResult,
};
pub use check_membership_use_case::{
    CheckMembershipError, CheckMembershipUseCase, MembershipStatus,
};
pub use get_group_members_use_case::{
    GetGroupMembersError, GetGroupMembersUseCase, GroupMembersResult,
};
pub use get_user_groups_use_case::{GetUserGroupsError, GetUserGroupsUseCase, UserGroupsResult};
pub use remove_member_use_case::{RemoveMemberError, RemoveMemberUseCase};
