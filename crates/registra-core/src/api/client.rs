//! Shared HTTP client for the Registros Policiales REST API.
//!
//! Every request in the system goes through [`ApiClient`]: it owns the base
//! URL, the request timeout, and the active bearer token, and funnels every
//! response through a single status-to-error normalization point.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::multipart::Form;
use reqwest::{header, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::{ApiError, Result};

/// HTTP request timeout in seconds.
/// 15s matches the original client configuration: long enough for slow
/// mobile links, short enough to fail while the user is still watching.
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// API client for the record-keeping backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection
/// pooling, and the token cell is shared so every clone sees the same
/// session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Create a new API client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Create a client with a non-default timeout. Used by tests that
    /// exercise timeout mapping without waiting 15 seconds.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Set the bearer token attached to all subsequent requests.
    pub fn set_token(&self, token: &str) {
        let mut guard = self.token.write().unwrap();
        *guard = Some(token.to_string());
    }

    /// Drop the active token; subsequent requests go out unauthenticated.
    pub fn clear_token(&self) {
        let mut guard = self.token.write().unwrap();
        *guard = None;
    }

    /// The currently active token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token, if one is set. Applies to JSON and
    /// multipart requests alike.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Check if response is successful, returning the mapped error with
    /// the body text if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.authorize(request).send().await?;
        let response = Self::check_response(response).await?;
        Ok(response.json().await?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        self.execute(self.http.get(self.url(path))).await
    }

    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        debug!(path, "GET with query");
        self.execute(self.http.get(self.url(path)).query(query)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path, "POST");
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path, "PUT");
        self.execute(self.http.put(self.url(path)).json(body)).await
    }

    /// DELETE with no expected body; 2xx is success regardless of payload.
    pub async fn delete(&self, path: &str) -> Result<()> {
        debug!(path, "DELETE");
        let response = self.authorize(self.http.delete(self.url(path))).send().await?;
        Self::check_response(response).await?;
        Ok(())
    }

    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        debug!(path, "POST multipart");
        self.execute(self.http.post(self.url(path)).multipart(form))
            .await
    }

    pub async fn put_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        debug!(path, "PUT multipart");
        self.execute(self.http.put(self.url(path)).multipart(form))
            .await
    }
}
