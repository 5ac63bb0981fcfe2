use sea_orm::DbErr;

/// Postgres reports partial unique index violations as SQLSTATE 23505.
pub fn is_unique_violation(err: &DbErr) -> bool {
    let err_str = err.to_string();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn detects_duplicate_key_message() {
        let err = DbErr::Query(RuntimeErr::Internal(
            "duplicate key value violates unique constraint \"idx_memberships_user_group_active\""
                .into(),
        ));
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn ignores_other_errors() {
        let err = DbErr::Conn(RuntimeErr::Internal("connection refused".into()));
        assert!(!is_unique_violation(&err));
    }
}
