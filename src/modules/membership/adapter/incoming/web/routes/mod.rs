mod add_member;
mod bulk_add_members;
mod bulk_remove_members;
mod check_membership;
mod get_group_members;
mod get_user_groups;
mod remove_member;

pub use add_member::{add_member_handler, __path_add_member_handler, AddMemberRequest};
pub use bulk_add_members::{
    bulk_add_members_handler, __path_bulk_add_members_handler, BulkMembersRequest,
};
pub use bulk_remove_members::{bulk_remove_members_handler, __path_bulk_remove_members_handler};
pub use check_membership::{check_membership_handler, __path_check_membership_handler};
pub use get_group_members::{get_group_members_handler, __path_get_group_members_handler};
pub use get_user_groups::{get_user_groups_handler, __path_get_user_groups_handler};
pub use remove_member::{remove_member_handler, __path_remove_member_handler};
