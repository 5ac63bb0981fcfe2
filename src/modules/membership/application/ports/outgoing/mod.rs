mod membership_query;
mod membership_repository;

pub use membership_query::{GroupMemberView, MembershipQuery, MembershipQueryError, UserGroupView};
pub use membership_repository::{
    MembershipRepository, MembershipRepositoryError, MembershipResult,
};
