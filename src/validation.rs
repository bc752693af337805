//! Form Validation
//!
//! Checks run before any request is made. Messages are shown inline.

use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Trimmed, non-empty task title
pub fn task_title(raw: &str) -> Result<&str, ValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(title)
}

/// Trimmed description; blank becomes `None`
pub fn task_description(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|d| !d.is_empty())
}

pub fn sign_up(email: &str, password: &str, confirm: &str) -> Result<(), ValidationError> {
    sign_in(email, password)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn sign_in(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}
