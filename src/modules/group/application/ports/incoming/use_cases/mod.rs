mod create_group_use_case;
mod delete_all_groups_use_case;
mod delete_group_use_case;
mod get_group_use_case;
mod get_groups_use_case;
mod update_group_use_case;

pub use create_group_use_case::{CreateGroupCommand, CreateGroupError, CreateGroupUseCase};
pub use delete_all_groups_use_case::{DeleteAllGroupsError, DeleteAllGroupsUseCase};
pub use delete_group_use_case::{DeleteGroupError, DeleteGroupUseCase};
pub use get_group_use_case::{GetGroupError, GetGroupUseCase};
pub use get_groups_use_case::{GetGroupsError, GetGroupsUseCase, GroupListResult};
pub use update_group_use_case::{UpdateGroupCommand, UpdateGroupError, UpdateGroupUseCase};
