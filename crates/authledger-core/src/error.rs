//! Error types for authentication operations.

use thiserror::Error;

use crate::account::ValidationError;

/// Errors returned by session manager operations.
///
/// Every variant's `Display` output is the exact message shown to the
/// user. Storage failures never surface their underlying cause; they are
/// logged inside the session manager and collapsed to the generic
/// per-operation variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Login called with an empty email or password.
    #[error("Email and password are required")]
    MissingCredentials,

    /// Signup called with at least one empty field.
    #[error("All fields are required")]
    MissingFields,

    /// Signup field validation failed.
    ///
    /// Carries every failing field in name, email, password order so a
    /// front end can render all messages at once. `Display` shows the
    /// first message.
    #[error("{}", .0.first().map_or("Invalid input", |e| e.message()))]
    Validation(Vec<ValidationError>),

    /// Login email does not match the accepted email pattern.
    #[error("Invalid email format")]
    InvalidEmail,

    /// Login password is shorter than six characters.
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    /// No registered account matches the supplied email and password.
    ///
    /// Deliberately identical for an unknown email and a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup email is already registered.
    #[error("User with this email already exists")]
    EmailTaken,

    /// A storage read or write failed during login.
    #[error("An error occurred during login")]
    LoginFailed,

    /// A storage read or write failed during signup.
    #[error("An error occurred during signup")]
    SignupFailed,
}

impl AuthError {
    /// Field-level validation errors, if this is a [`AuthError::Validation`].
    #[must_use]
    pub fn field_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

/// Result type for session manager operations.
pub type AuthResult<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            AuthError::MissingCredentials.to_string(),
            "Email and password are required"
        );
        assert_eq!(AuthError::MissingFields.to_string(), "All fields are required");
        assert_eq!(AuthError::InvalidEmail.to_string(), "Invalid email format");
        assert_eq!(
            AuthError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            AuthError::EmailTaken.to_string(),
            "User with this email already exists"
        );
        assert_eq!(AuthError::LoginFailed.to_string(), "An error occurred during login");
        assert_eq!(AuthError::SignupFailed.to_string(), "An error occurred during signup");
    }

    #[test]
    fn validation_displays_first_field_error() {
        let err = AuthError::Validation(vec![
            ValidationError::EmptyName,
            ValidationError::ShortPassword,
        ]);
        assert_eq!(err.to_string(), "Name is required");
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn field_errors_empty_for_other_variants() {
        assert!(AuthError::EmailTaken.field_errors().is_empty());
    }
}
