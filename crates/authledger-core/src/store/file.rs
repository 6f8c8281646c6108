//! File-backed credential store.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::debug;

use super::{CredentialStore, StoreResult};

/// Durable credential store keeping one JSON file per key.
///
/// Keys are sanitized into file names, so distinct keys must not
/// collapse to the same sanitized name. The two fixed keys used by this
/// crate do not collide.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        debug!("opened file store at {}", dir.display());
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

#[async_trait]
impl CredentialStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        match fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(&value)?;
        fs::write(self.path_for(key), bytes).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn get_missing_key_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).await.unwrap();
        assert!(store.get("@user_data").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn values_survive_reopening_the_store() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let store = FileStore::open(tmp.path()).await.unwrap();
            store.set("@user_data", json!({"name": "Ann"})).await.unwrap();
        }
        let store = FileStore::open(tmp.path()).await.unwrap();
        assert_eq!(
            store.get("@user_data").await.unwrap(),
            Some(json!({"name": "Ann"}))
        );
    }

    #[tokio::test]
    async fn fixed_keys_map_to_distinct_files() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).await.unwrap();
        store.set("@user_data", json!(1)).await.unwrap();
        store.set("@registered_users", json!(2)).await.unwrap();
        assert_eq!(store.get("@user_data").await.unwrap(), Some(json!(1)));
        assert_eq!(store.get("@registered_users").await.unwrap(), Some(json!(2)));
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).await.unwrap();
        store.set("key", json!(1)).await.unwrap();
        store.remove("key").await.unwrap();
        store.remove("key").await.unwrap();
        assert!(store.get("key").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_file_surfaces_as_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).await.unwrap();
        tokio::fs::write(tmp.path().join("key.json"), b"not json")
            .await
            .unwrap();
        assert!(store.get("key").await.is_err());
    }
}
