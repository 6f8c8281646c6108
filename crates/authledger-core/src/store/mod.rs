//! Credential store abstraction and backends.
//!
//! A credential store is a durable string-keyed map of JSON values. The
//! session and directory records each live under one fixed key; the two
//! keys are independent and no atomicity is assumed between them.

pub mod file;
pub mod memory;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage key for the active session record (`{name, email}`).
pub const SESSION_KEY: &str = "@user_data";

/// Storage key for the registered-account directory (array of
/// `{name, email, password}`).
pub const DIRECTORY_KEY: &str = "@registered_users";

/// Error type for credential store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Backend-specific failure.
    #[error("Storage error: {0}")]
    Backend(String),
}

/// Result type for credential store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Durable key-value storage for JSON values.
///
/// Implementations must survive process restarts where durability is
/// meaningful for the backend; operations may fail and callers decide
/// how failures surface.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Store `value` under `key`, replacing any existing value.
    async fn set(&self, key: &str, value: Value) -> StoreResult<()>;

    /// Remove the value stored under `key`. Removing an absent key
    /// succeeds.
    async fn remove(&self, key: &str) -> StoreResult<()>;
}
