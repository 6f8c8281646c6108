//! The session manager.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, warn};

use crate::account::{
    AuthStatus, Directory, RegisteredAccount, SessionUser, validate_signup,
};
use crate::account::validation::{is_valid_email, is_valid_password};
use crate::error::{AuthError, AuthResult};
use crate::store::{CredentialStore, SESSION_KEY, StoreResult};

/// Owns the authentication status and orchestrates signup, login, and
/// logout against a credential store.
///
/// All state changes go through an internal watch channel, so consumers
/// can either poll [`SessionManager::status`] or hold a receiver from
/// [`SessionManager::subscribe`] and react to changes. Operations are
/// meant to be driven one at a time by a single user-facing flow; the
/// manager does not guard against overlapping calls.
pub struct SessionManager {
    store: Arc<dyn CredentialStore>,
    directory: Directory,
    status: watch::Sender<AuthStatus>,
}

impl SessionManager {
    /// Create a manager over the given store.
    ///
    /// The status starts as initializing with no user; call
    /// [`SessionManager::initialize`] once at startup to restore any
    /// persisted session and clear the flag.
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let (status, _) = watch::channel(AuthStatus {
            current_user: None,
            is_initializing: true,
        });
        Self {
            directory: Directory::new(Arc::clone(&store)),
            store,
            status,
        }
    }

    /// Restore the persisted session, if any.
    ///
    /// Read or parse failures are logged and swallowed: startup must
    /// never fail the application. The initializing flag is cleared at
    /// the end regardless of outcome and never set again.
    pub async fn initialize(&self) {
        match self.store.get(SESSION_KEY).await {
            Ok(Some(value)) => match serde_json::from_value::<SessionUser>(value) {
                Ok(user) => {
                    debug!("restored session for {}", user.email);
                    self.status.send_modify(|s| s.current_user = Some(user));
                }
                Err(e) => warn!("persisted session record is not a session user: {e}"),
            },
            Ok(None) => debug!("no persisted session"),
            Err(e) => warn!("failed to read persisted session: {e}"),
        }
        self.status.send_modify(|s| s.is_initializing = false);
    }

    /// Sign in with an email and password.
    ///
    /// On success the session is persisted, the in-memory status is
    /// updated, and the signed-in user is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] for empty inputs,
    /// [`AuthError::InvalidEmail`] or [`AuthError::PasswordTooShort`]
    /// for malformed inputs, [`AuthError::InvalidCredentials`] when no
    /// account matches, and [`AuthError::LoginFailed`] when storage
    /// fails.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<SessionUser> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail);
        }
        if !is_valid_password(password) {
            return Err(AuthError::PasswordTooShort);
        }

        let matched = self.directory.authenticate(email, password).await.map_err(|e| {
            error!("login: directory read failed: {e}");
            AuthError::LoginFailed
        })?;
        let Some(user) = matched else {
            return Err(AuthError::InvalidCredentials);
        };

        self.persist_session(&user).await.map_err(|e| {
            error!("login: failed to persist session: {e}");
            AuthError::LoginFailed
        })?;
        debug!("user logged in: {}", user.email);
        self.status.send_modify(|s| s.current_user = Some(user.clone()));
        Ok(user)
    }

    /// Register a new account and sign it in immediately.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingFields`] for empty inputs,
    /// [`AuthError::Validation`] with every failing field for malformed
    /// inputs, [`AuthError::EmailTaken`] when the email is already
    /// registered, and [`AuthError::SignupFailed`] when storage fails.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> AuthResult<SessionUser> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        validate_signup(name, email, password).map_err(AuthError::Validation)?;

        let mut accounts = self.directory.load().await.map_err(|e| {
            error!("signup: directory read failed: {e}");
            AuthError::SignupFailed
        })?;
        if accounts.iter().any(|a| a.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let account = RegisteredAccount::new(name, email, password);
        let user = account.session_user();
        accounts.push(account);
        self.directory.save(&accounts).await.map_err(|e| {
            error!("signup: failed to save directory: {e}");
            AuthError::SignupFailed
        })?;

        // Auto-login after signup.
        self.persist_session(&user).await.map_err(|e| {
            error!("signup: failed to persist session: {e}");
            AuthError::SignupFailed
        })?;
        debug!("user signed up: {}", user.email);
        self.status.send_modify(|s| s.current_user = Some(user.clone()));
        Ok(user)
    }

    /// Sign out the current user.
    ///
    /// The in-memory status is cleared even if removing the persisted
    /// session fails; a failed removal is logged and not surfaced, so
    /// the caller can never remain stuck authenticated.
    pub async fn logout(&self) {
        if let Err(e) = self.store.remove(SESSION_KEY).await {
            warn!("logout: failed to remove persisted session: {e}");
        }
        debug!("user logged out");
        self.status.send_modify(|s| s.current_user = None);
    }

    /// Current authentication status.
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.status.borrow().clone()
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<SessionUser> {
        self.status.borrow().current_user.clone()
    }

    /// Whether the startup session restore is still in progress.
    #[must_use]
    pub fn is_initializing(&self) -> bool {
        self.status.borrow().is_initializing
    }

    /// Subscribe to status changes.
    ///
    /// The receiver observes every status transition, including the end
    /// of initialization.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.status.subscribe()
    }

    async fn persist_session(&self, user: &SessionUser) -> StoreResult<()> {
        let value = serde_json::to_value(user)?;
        self.store.set(SESSION_KEY, value).await
    }
}
