//! Account and session model types.

use serde::{Deserialize, Serialize};

/// A registered identity in the local account directory.
///
/// Records are created by signup, never mutated, and never deleted. The
/// password is stored in plaintext: the directory simulates a remote
/// user database on-device and intentionally keeps its storage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredAccount {
    /// Display name supplied at signup.
    pub name: String,
    /// Email address; unique across the directory (exact match).
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

impl RegisteredAccount {
    /// Create a new account record.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// The session view of this account, with the password stripped.
    #[must_use]
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// The currently signed-in user.
///
/// This is the only shape ever persisted under the session key; it never
/// carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// In-memory authentication status published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthStatus {
    /// The signed-in user, if any.
    pub current_user: Option<SessionUser>,
    /// True only while the persisted session is being restored at
    /// startup. Cleared exactly once, permanently.
    pub is_initializing: bool,
}

impl AuthStatus {
    /// Whether a user is currently signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}
