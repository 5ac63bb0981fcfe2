pub const GROUP_NAME_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GroupFieldError {
    #[error("Group name cannot be empty")]
    EmptyName,

    #[error("Group name must not exceed 100 characters")]
    NameTooLong,
}

impl GroupFieldError {
    pub fn code(&self) -> &'static str {
        match self {
            GroupFieldError::EmptyName => "EMPTY_GROUP_NAME",
            GroupFieldError::NameTooLong => "GROUP_NAME_TOO_LONG",
        }
    }
}

pub fn validate_group_name(name: &str) -> Result<String, GroupFieldError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(GroupFieldError::EmptyName);
    }
    if name.chars().count() > GROUP_NAME_MAX_CHARS {
        return Err(GroupFieldError::NameTooLong);
    }

    Ok(name.to_string())
}

/// Blank descriptions are stored as NULL.
pub fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_bounded() {
        assert_eq!(validate_group_name("  devs ").unwrap(), "devs");
        assert_eq!(validate_group_name("   "), Err(GroupFieldError::EmptyName));
        assert!(validate_group_name(&"g".repeat(100)).is_ok());
        assert_eq!(
            validate_group_name(&"g".repeat(101)),
            Err(GroupFieldError::NameTooLong)
        );
    }

    #[test]
    fn blank_description_becomes_none() {
        assert_eq!(normalize_description(Some("  ".to_string())), None);
        assert_eq!(
            normalize_description(Some(" core team ".to_string())).as_deref(),
            Some("core team")
        );
        assert_eq!(normalize_description(None), None);
    }
}
