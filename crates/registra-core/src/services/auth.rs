//! Authentication endpoints.
//!
//! These are the raw API calls; the session lifecycle (persistence,
//! pipeline seeding, state transitions) lives in [`crate::auth::SessionManager`]
//! on top of this service.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{ApiClient, ApiError, Result};
use crate::models::User;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Successful login payload: the bearer token plus the user's profile.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Registration payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Profile fields the API allows updating via `PUT /auth/profile`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token and profile. Empty input is
    /// rejected locally; no request leaves the process.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        debug!(username, "Logging in");
        self.client
            .post("/auth/login", &LoginRequest { username, password })
            .await
    }

    /// One-shot account creation. Does not sign the new user in; a login
    /// call must follow. All fields plus the confirmation are validated
    /// locally before the request is issued.
    pub async fn register(&self, new_user: &NewUser, password_confirmation: &str) -> Result<User> {
        if new_user.name.trim().is_empty()
            || new_user.email.trim().is_empty()
            || new_user.username.trim().is_empty()
            || new_user.password.is_empty()
            || password_confirmation.is_empty()
        {
            return Err(ApiError::Validation("All fields are required".to_string()));
        }
        if new_user.password != password_confirmation {
            return Err(ApiError::Validation("Passwords do not match".to_string()));
        }

        debug!(username = %new_user.username, "Registering account");
        self.client.post("/auth/register", new_user).await
    }

    /// Check token validity against the server. Not called during startup
    /// reconstruction; exposed for callers that opt into verify-on-resume.
    pub async fn verify(&self) -> Result<serde_json::Value> {
        self.client.get("/auth/verify").await
    }

    /// Fetch the profile of the authenticated user.
    pub async fn current_user(&self) -> Result<User> {
        self.client.get("/auth/me").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        self.client.put("/auth/profile", update).await
    }

    pub async fn change_password(&self, current_password: &str, new_password: &str) -> Result<()> {
        if current_password.is_empty() || new_password.is_empty() {
            return Err(ApiError::Validation(
                "Current and new password are required".to_string(),
            ));
        }

        let _: serde_json::Value = self
            .client
            .post(
                "/auth/change-password",
                &ChangePasswordRequest {
                    current_password,
                    new_password,
                },
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(ApiClient::new("http://127.0.0.1:9").unwrap())
    }

    #[tokio::test]
    async fn test_empty_credentials_rejected_locally() {
        // Port 9 (discard) would fail with Network if a request went out;
        // Validation proves the check fired first.
        let auth = service();
        assert!(matches!(
            auth.login("", "secret").await,
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            auth.login("user", "").await,
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            auth.login("   ", "secret").await,
            Err(ApiError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_register_mismatched_confirmation_rejected() {
        let auth = service();
        let new_user = NewUser {
            name: "Ana Rojas".to_string(),
            email: "ana@example.com".to_string(),
            username: "arojas".to_string(),
            password: "first".to_string(),
        };
        assert!(matches!(
            auth.register(&new_user, "second").await,
            Err(ApiError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_register_empty_field_rejected() {
        let auth = service();
        let new_user = NewUser {
            name: "Ana Rojas".to_string(),
            email: String::new(),
            username: "arojas".to_string(),
            password: "pw".to_string(),
        };
        assert!(matches!(
            auth.register(&new_user, "pw").await,
            Err(ApiError::Validation(_))
        ));
    }
}
