//! The registered-account directory.

use std::sync::Arc;

use tracing::{debug, warn};

use super::model::{RegisteredAccount, SessionUser};
use crate::store::{CredentialStore, DIRECTORY_KEY, StoreResult};

/// Persistent collection of all registered accounts.
///
/// The directory lives under a single storage key as a JSON array. It is
/// the only writer of that key; reads tolerate a missing or undecodable
/// value by treating it as an empty directory.
pub struct Directory {
    store: Arc<dyn CredentialStore>,
}

impl Directory {
    /// Create a directory over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Load all registered accounts.
    ///
    /// A missing directory record, or one that does not decode as an
    /// account list, yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read itself fails.
    pub async fn load(&self) -> StoreResult<Vec<RegisteredAccount>> {
        match self.store.get(DIRECTORY_KEY).await? {
            Some(value) => match serde_json::from_value(value) {
                Ok(accounts) => Ok(accounts),
                Err(e) => {
                    warn!("directory record is not a valid account list: {e}");
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    /// Persist the full account list.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the storage write fails.
    pub async fn save(&self, accounts: &[RegisteredAccount]) -> StoreResult<()> {
        let value = serde_json::to_value(accounts)?;
        self.store.set(DIRECTORY_KEY, value).await?;
        debug!("saved directory with {} account(s)", accounts.len());
        Ok(())
    }

    /// Find the account whose email and password both exactly match.
    ///
    /// Email uniqueness guarantees at most one match. Returns the session
    /// view of the account, never the stored password.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails.
    pub async fn authenticate(&self, email: &str, password: &str) -> StoreResult<Option<SessionUser>> {
        let accounts = self.load().await?;
        Ok(accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
            .map(RegisteredAccount::session_user))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn directory() -> (Arc<MemoryStore>, Directory) {
        let store = Arc::new(MemoryStore::new());
        let dir = Directory::new(Arc::clone(&store) as Arc<dyn CredentialStore>);
        (store, dir)
    }

    #[tokio::test]
    async fn load_missing_directory_is_empty() {
        let (_store, dir) = directory();
        assert!(dir.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn load_undecodable_directory_is_empty() {
        let (store, dir) = directory();
        store
            .set(DIRECTORY_KEY, serde_json::json!({"not": "a list"}))
            .await
            .unwrap();
        assert!(dir.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let (_store, dir) = directory();
        let accounts = vec![
            RegisteredAccount::new("Ann", "ann@x.com", "secret1"),
            RegisteredAccount::new("Bob", "bob@x.com", "secret2"),
        ];
        dir.save(&accounts).await.unwrap();
        assert_eq!(dir.load().await.unwrap(), accounts);
    }

    #[tokio::test]
    async fn authenticate_requires_exact_match_on_both_fields() {
        let (_store, dir) = directory();
        dir.save(&[RegisteredAccount::new("Ann", "ann@x.com", "secret1")])
            .await
            .unwrap();

        let user = dir.authenticate("ann@x.com", "secret1").await.unwrap().unwrap();
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "ann@x.com");

        assert!(dir.authenticate("ann@x.com", "wrong12").await.unwrap().is_none());
        assert!(dir.authenticate("ANN@x.com", "secret1").await.unwrap().is_none());
        assert!(dir.authenticate("bob@x.com", "secret1").await.unwrap().is_none());
    }
}
