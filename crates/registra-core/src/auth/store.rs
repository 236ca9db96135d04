//! Credential persistence for the session token and user profile.
//!
//! Two interchangeable backends sit behind one trait: the OS keychain via
//! `keyring` when the platform provides one, and a process-local map when
//! it does not (headless CI, containers without a secret service). The
//! backend is picked once at startup by [`default_store`]; call sites never
//! branch on platform.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use keyring::Entry;
use tracing::warn;

use crate::api::{ApiError, Result};

/// Service name under which keychain entries are registered.
const SERVICE_NAME: &str = "registra";

/// Persisted key for the bearer token.
pub const TOKEN_KEY: &str = "userToken";

/// Persisted key for the JSON-serialized user profile.
pub const USER_KEY: &str = "userData";

/// Durable key-to-string persistence. Values written are retrievable
/// verbatim until deleted or the backing medium is cleared; callers see
/// opaque storage with no TTL and no encryption contract.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
}

/// Secure credential storage backed by the OS keychain.
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub fn new() -> Self {
        Self::with_service(SERVICE_NAME)
    }

    pub fn with_service(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry> {
        Entry::new(&self.service, key)
            .map_err(|e| ApiError::Storage(format!("Failed to open keyring entry: {e}")))
    }

    /// Check whether the platform keychain actually answers. A missing
    /// entry counts as available; a platform-level failure does not.
    pub fn is_available(&self) -> bool {
        match Entry::new(&self.service, "availability-check") {
            Ok(entry) => match entry.get_password() {
                Ok(_) | Err(keyring::Error::NoEntry) => true,
                Err(_) => false,
            },
            Err(_) => false,
        }
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for KeyringStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(ApiError::Storage(format!(
                "Failed to read '{key}' from keychain: {e}"
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entry(key)?
            .set_password(value)
            .map_err(|e| ApiError::Storage(format!("Failed to write '{key}' to keychain: {e}")))
    }

    fn delete(&self, key: &str) -> Result<()> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(ApiError::Storage(format!(
                "Failed to delete '{key}' from keychain: {e}"
            ))),
        }
    }
}

/// In-memory fallback store. Clones share the same map, so a session
/// persisted through one handle is visible through another for the
/// lifetime of the process.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        Ok(())
    }
}

/// Select the storage backend for this process: the OS keychain when it
/// answers, otherwise the in-memory fallback.
pub fn default_store() -> Box<dyn CredentialStore> {
    let keyring = KeyringStore::new();
    if keyring.is_available() {
        Box::new(keyring)
    } else {
        warn!("Platform keychain unavailable, falling back to in-memory credential store");
        Box::new(MemoryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);

        store.set(TOKEN_KEY, "tok-1").unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("tok-1"));

        store.set(TOKEN_KEY, "tok-2").unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("tok-2"));

        store.delete(TOKEN_KEY).unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_memory_store_delete_missing_is_ok() {
        let store = MemoryStore::new();
        assert!(store.delete("never-written").is_ok());
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let clone = store.clone();

        store.set(USER_KEY, "{}").unwrap();
        assert_eq!(clone.get(USER_KEY).unwrap().as_deref(), Some("{}"));
    }
}
