mod create_group_service;
mod delete_all_groups_service;
mod delete_group_service;
mod get_group_service;
mod get_groups_service;
mod update_group_service;

pub use create_group_service::CreateGroupService;
pub use delete_all_groups_service::DeleteAllGroupsService;
pub use delete_group_service::DeleteGroupService;
pub use get_group_service::GetGroupService;
pub use get_groups_service::GetGroupsService;
pub use update_group_service::UpdateGroupService;
