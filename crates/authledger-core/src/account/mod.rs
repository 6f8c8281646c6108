//! Account management: models, validation, and the registered-account
//! directory.

pub mod directory;
pub mod model;
pub mod validation;

pub use directory::Directory;
pub use model::{AuthStatus, RegisteredAccount, SessionUser};
pub use validation::{
    ValidationError, ValidationResult, email_error, is_valid_email, is_valid_name,
    is_valid_password, name_error, password_error, validate_signup,
};
