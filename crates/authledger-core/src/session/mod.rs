//! Session management: the authentication state machine.

pub mod manager;

pub use manager::SessionManager;
