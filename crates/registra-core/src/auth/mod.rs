//! Authentication: credential persistence and the session lifecycle.
//!
//! This module provides:
//! - `CredentialStore`: the key-value persistence trait with keychain and
//!   in-memory backends selected at startup
//! - `SessionManager`: sign-in/sign-out/bootstrap driving the pipeline's
//!   active token
//!
//! The persisted entries are the bearer token and the JSON-serialized
//! profile under fixed keys; a profile without a token is never used.

pub mod session;
pub mod store;

pub use session::{SessionManager, SessionState};
pub use store::{default_store, CredentialStore, KeyringStore, MemoryStore, TOKEN_KEY, USER_KEY};
