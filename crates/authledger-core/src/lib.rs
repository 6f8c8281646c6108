//! # authledger-core
//!
//! Core authentication and session logic for `AuthLedger`.
//!
//! This crate provides:
//! - Input validation for names, emails, and passwords
//! - A key-value credential store abstraction with in-memory and
//!   file-backed implementations
//! - A session manager orchestrating signup, login, logout, and
//!   session restoration with a reactive status channel
//!
//! The account directory is a local simulation: registered accounts are
//! persisted as plain JSON records on the device, including passwords.
//! There is no network, no hashing, and no token issuance by design.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod account;
mod error;
pub mod session;
pub mod store;

pub use account::{AuthStatus, RegisteredAccount, SessionUser};
pub use account::{
    Directory, ValidationError, ValidationResult, email_error, is_valid_email, is_valid_name,
    is_valid_password, name_error, password_error, validate_signup,
};
pub use error::{AuthError, AuthResult};
pub use session::SessionManager;
pub use store::{
    CredentialStore, DIRECTORY_KEY, FileStore, MemoryStore, SESSION_KEY, StoreError, StoreResult,
};
