mod add_member_service;
mod bulk_add_members_service;
mod bulk_remove_members_service;
mod check_membership_service;
mod get_group_members_service;
mod get_user_groups_service;
mod remove_member_service;

pub use add_member_service::AddMemberService;
pub use bulk_add_members_service::BulkAddMembersService;
pub use bulk_remove_members_service::BulkRemoveMembersService;
pub use check_membership_service::CheckMembershipService;
pub use get_group_members_service::GetGroupMembersService;
pub use get_user_groups_service::GetUserGroupsService;
pub use remove_member_service::RemoveMemberService;
