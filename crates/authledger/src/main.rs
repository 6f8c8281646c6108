//! `AuthLedger` - local-first account and session shell
//!
//! A thin terminal front end over `authledger-core`: sign up, sign in,
//! view the signed-in account, and sign out. All decisions live in the
//! core; this binary only prompts and prints.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod shell;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use authledger_core::{CredentialStore, FileStore, SessionManager};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "authledger=info,authledger_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let dir = data_dir()?;
    info!("Starting AuthLedger, storage at {}", dir.display());

    let store = Arc::new(
        FileStore::open(&dir)
            .await
            .with_context(|| format!("failed to open storage at {}", dir.display()))?,
    );
    let manager = SessionManager::new(store as Arc<dyn CredentialStore>);

    // The one startup suspension point: until this completes the shell
    // shows neither the signed-in nor the signed-out view.
    println!("Loading...");
    manager.initialize().await;

    shell::run(&manager).await
}

/// Resolve the on-device storage directory.
///
/// `AUTHLEDGER_DATA_DIR` overrides the platform data directory.
fn data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(dir) = std::env::var("AUTHLEDGER_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_dir()
        .map(|d| d.join("authledger"))
        .context("could not determine a data directory; set AUTHLEDGER_DATA_DIR")
}
