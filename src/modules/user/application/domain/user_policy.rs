use email_address::EmailAddress;

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 50;
pub const PASSWORD_MIN_CHARS: usize = 8;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserFieldError {
    #[error("Name must be at least 3 characters")]
    NameTooShort,

    #[error("Name must not exceed 50 characters")]
    NameTooLong,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}

impl UserFieldError {
    pub fn code(&self) -> &'static str {
        match self {
            UserFieldError::NameTooShort => "NAME_TOO_SHORT",
            UserFieldError::NameTooLong => "NAME_TOO_LONG",
            UserFieldError::InvalidEmail => "INVALID_EMAIL",
            UserFieldError::PasswordTooShort => "PASSWORD_TOO_SHORT",
        }
    }
}

pub fn validate_name(name: &str) -> Result<String, UserFieldError> {
    let name = name.trim();
    let chars = name.chars().count();

    if chars < NAME_MIN_CHARS {
        return Err(UserFieldError::NameTooShort);
    }
    if chars > NAME_MAX_CHARS {
        return Err(UserFieldError::NameTooLong);
    }

    Ok(name.to_string())
}

pub fn validate_email(email: &str) -> Result<String, UserFieldError> {
    let email = email.trim();

    if !EmailAddress::is_valid(email) {
        return Err(UserFieldError::InvalidEmail);
    }

    Ok(email.to_string())
}

pub fn validate_password(password: &str) -> Result<(), UserFieldError> {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err(UserFieldError::PasswordTooShort);
    }
    Ok(())
}
