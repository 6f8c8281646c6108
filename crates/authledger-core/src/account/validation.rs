//! Signup and login input validation.

/// Validation error for a single input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty or whitespace-only.
    EmptyName,
    /// Email is empty.
    EmptyEmail,
    /// Email does not match the accepted pattern.
    InvalidEmail,
    /// Password is empty.
    EmptyPassword,
    /// Password is shorter than six characters.
    ShortPassword,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyName => "Name is required",
            Self::EmptyEmail => "Email is required",
            Self::InvalidEmail => "Invalid email format",
            Self::EmptyPassword => "Password is required",
            Self::ShortPassword => "Password must be at least 6 characters",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyEmail | Self::InvalidEmail => "email",
            Self::EmptyPassword | Self::ShortPassword => "password",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a set of signup fields.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Whether `email` matches the accepted pattern.
///
/// The pattern is `^[^\s@]+@[^\s@]+\.[^\s@]+$`: no whitespace anywhere,
/// exactly one `@` with a non-empty part before it, and a dot strictly
/// inside the domain. Empty input is invalid.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Needs a dot with at least one character on each side of it.
    let bytes = domain.as_bytes();
    bytes.len() >= 3 && bytes[1..bytes.len() - 1].contains(&b'.')
}

/// Whether `password` is at least six characters long.
///
/// Length is counted in characters, not bytes.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 6
}

/// Whether `name` is non-empty after trimming whitespace.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Validation error for `email`, if any.
#[must_use]
pub fn email_error(email: &str) -> Option<ValidationError> {
    if email.is_empty() {
        Some(ValidationError::EmptyEmail)
    } else if is_valid_email(email) {
        None
    } else {
        Some(ValidationError::InvalidEmail)
    }
}

/// Validation error for `password`, if any.
#[must_use]
pub fn password_error(password: &str) -> Option<ValidationError> {
    if password.is_empty() {
        Some(ValidationError::EmptyPassword)
    } else if is_valid_password(password) {
        None
    } else {
        Some(ValidationError::ShortPassword)
    }
}

/// Validation error for `name`, if any.
#[must_use]
pub fn name_error(name: &str) -> Option<ValidationError> {
    if is_valid_name(name) {
        None
    } else {
        Some(ValidationError::EmptyName)
    }
}

/// Validate all signup fields at once.
///
/// Returns `Ok(())` if all fields are valid, or every failing field's
/// error in name, email, password order so a front end can display them
/// simultaneously.
///
/// # Errors
///
/// Returns a vector of [`ValidationError`] if any field is invalid.
pub fn validate_signup(name: &str, email: &str, password: &str) -> ValidationResult {
    let errors: Vec<ValidationError> = [name_error(name), email_error(email), password_error(password)]
        .into_iter()
        .flatten()
        .collect();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
