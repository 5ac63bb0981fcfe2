use chrono::Utc;

use crate::group::application::ports::outgoing::GroupResult;
use crate::membership::application::ports::outgoing::MembershipResult;
use crate::user::application::ports::outgoing::UserResult;

pub fn sample_user(id: i32, name: &str) -> UserResult {
    let now = Utc::now();
    UserResult {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

pub fn sample_group(id: i32, name: &str) -> GroupResult {
    let now = Utc::now();
    GroupResult {
        id,
        name: name.to_string(),
        description: None,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

/// Active membership
pub fn sample_membership(id: i32, user_id: i32, group_id: i32) -> MembershipResult {
    let now = Utc::now();
    MembershipResult {
        id,
        user_id,
        group_id,
        is_active: true,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}
