//! Session lifecycle: token acquisition, persistence, and teardown.
//!
//! [`SessionManager`] owns the credential store and drives the pipeline's
//! active token through the `Anonymous -> Authenticating -> Authenticated`
//! lifecycle. The in-memory session is authoritative for the lifetime of
//! the process; persistence is best-effort so a full keychain never blocks
//! a sign-in that the server already accepted.

use tracing::{debug, info, warn};

use crate::api::{ApiClient, ApiError, Result};
use crate::models::User;
use crate::services::auth::{AuthService, NewUser};

use super::store::{CredentialStore, TOKEN_KEY, USER_KEY};

/// Where the session currently stands. `Authenticating` is only observable
/// from a concurrent vantage point; sign-in leaves it before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated,
}

pub struct SessionManager {
    client: ApiClient,
    auth: AuthService,
    store: Box<dyn CredentialStore>,
    state: SessionState,
    user: Option<User>,
}

impl SessionManager {
    pub fn new(client: ApiClient, store: Box<dyn CredentialStore>) -> Self {
        let auth = AuthService::new(client.clone());
        Self {
            client,
            auth,
            store,
            state: SessionState::Anonymous,
            user: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    /// The restored or signed-in profile, when one is known.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Startup reconstruction: if a token was persisted by a prior
    /// session, seed the pipeline and report `Authenticated` without a
    /// verification round-trip. A storage failure is treated as an absent
    /// session rather than an error. Returns whether a session was
    /// restored.
    pub fn bootstrap(&mut self) -> bool {
        let token = match self.store.get(TOKEN_KEY) {
            Ok(Some(token)) => token,
            Ok(None) => return false,
            Err(e) => {
                warn!(error = %e, "Failed to read persisted session, starting anonymous");
                return false;
            }
        };

        // The profile is only usable alongside a token; a missing or
        // unparseable blob leaves the session authenticated with no
        // profile loaded.
        self.user = match self.store.get(USER_KEY) {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "Persisted profile is not valid JSON, ignoring");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read persisted profile");
                None
            }
        };

        self.client.set_token(&token);
        self.state = SessionState::Authenticated;
        info!("Session restored from credential store");
        true
    }

    /// Sign in and seed the pipeline. Empty input fails locally with
    /// `Validation`; a rejected login reverts to `Anonymous` and surfaces
    /// the mapped error.
    pub async fn sign_in(&mut self, username: &str, password: &str) -> Result<User> {
        self.state = SessionState::Authenticating;

        let response = match self.auth.login(username, password).await {
            Ok(response) => response,
            Err(e) => {
                self.state = SessionState::Anonymous;
                return Err(e);
            }
        };

        self.client.set_token(&response.token);
        self.state = SessionState::Authenticated;
        self.user = Some(response.user.clone());
        info!(username, "Signed in");

        // Best-effort persistence: the in-memory session stays valid even
        // if the backing medium rejects the write.
        if let Err(e) = self.persist(&response.token, &response.user) {
            warn!(error = %e, "Failed to persist session, it will not survive a restart");
        }

        Ok(response.user)
    }

    fn persist(&self, token: &str, user: &User) -> Result<()> {
        self.store.set(TOKEN_KEY, token)?;
        let blob = serde_json::to_string(user)
            .map_err(|e| ApiError::Storage(format!("Failed to serialize profile: {e}")))?;
        self.store.set(USER_KEY, &blob)
    }

    /// Sign out: the in-memory session is cleared first, then the
    /// persisted entries. A storage failure is surfaced after the clear,
    /// so the process is anonymous regardless.
    pub fn sign_out(&mut self) -> Result<()> {
        self.client.clear_token();
        self.state = SessionState::Anonymous;
        self.user = None;
        debug!("Signed out");

        let token_result = self.store.delete(TOKEN_KEY);
        let user_result = self.store.delete(USER_KEY);
        token_result.and(user_result)
    }

    /// Teardown a caller performs upon observing `ApiError::Auth` from any
    /// authenticated call. The client does not retry or refresh; the
    /// caller is expected to redirect to re-authentication afterwards.
    pub fn handle_auth_error(&mut self) {
        warn!("Authenticated call was rejected, tearing down session");
        if let Err(e) = self.sign_out() {
            warn!(error = %e, "Failed to clear persisted session during teardown");
        }
    }

    /// One-shot registration; session state is untouched and the new user
    /// must still sign in.
    pub async fn register(&self, new_user: &NewUser, password_confirmation: &str) -> Result<User> {
        self.auth.register(new_user, password_confirmation).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::MemoryStore;

    fn manager_with(store: MemoryStore) -> SessionManager {
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        SessionManager::new(client, Box::new(store))
    }

    #[test]
    fn test_cold_start_is_anonymous() {
        let mut manager = manager_with(MemoryStore::new());
        assert_eq!(manager.state(), SessionState::Anonymous);
        assert!(!manager.bootstrap());
        assert_eq!(manager.state(), SessionState::Anonymous);
        assert!(manager.user().is_none());
    }

    #[test]
    fn test_bootstrap_restores_persisted_token() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "persisted-token").unwrap();

        let mut manager = manager_with(store);
        assert!(manager.bootstrap());
        assert!(manager.is_authenticated());
    }

    #[test]
    fn test_bootstrap_tolerates_corrupt_profile() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok").unwrap();
        store.set(USER_KEY, "{not json").unwrap();

        let mut manager = manager_with(store);
        assert!(manager.bootstrap());
        assert!(manager.is_authenticated());
        assert!(manager.user().is_none());
    }

    #[test]
    fn test_profile_without_token_is_unusable() {
        let store = MemoryStore::new();
        store
            .set(USER_KEY, "{\"id\":1,\"name\":\"x\",\"email\":\"x\",\"username\":\"x\",\"role\":\"x\",\"createdAt\":\"2024-01-01T00:00:00Z\",\"updatedAt\":\"2024-01-01T00:00:00Z\"}")
            .unwrap();

        let mut manager = manager_with(store);
        assert!(!manager.bootstrap());
        assert_eq!(manager.state(), SessionState::Anonymous);
        assert!(manager.user().is_none());
    }

    #[tokio::test]
    async fn test_failed_sign_in_reverts_to_anonymous() {
        let mut manager = manager_with(MemoryStore::new());
        let result = manager.sign_in("", "pw").await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert_eq!(manager.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_sign_out_clears_store_and_state() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok").unwrap();

        let mut manager = manager_with(store.clone());
        assert!(manager.bootstrap());

        manager.sign_out().unwrap();
        assert_eq!(manager.state(), SessionState::Anonymous);
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(USER_KEY).unwrap(), None);
    }
}
