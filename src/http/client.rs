//! Low-level HTTP client — `GroupBuyHttp`.
//!
//! Generic verb methods that issue exactly one request and decode the JSON
//! body. Route building lives in the domain sub-clients. There is no retry:
//! every failure surfaces to the caller.

use crate::error::HttpError;
use crate::network::PUBLIC_TIMEOUT;

use async_lock::RwLock;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Whether requests carry the user's credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    /// Send the auth token (native) or cookies (WASM).
    Include,
    /// Never send credentials. Used for publicly viewable resources.
    Omit,
}

/// Low-level HTTP client for the group-buy REST API.
pub struct GroupBuyHttp {
    base_url: String,
    client: Client,
    credentials: Credentials,
    /// Auth token for native clients. NEVER exposed publicly.
    auth_token: Arc<RwLock<Option<String>>>,
}

impl GroupBuyHttp {
    /// Authenticated client with the given timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        Self::build(base_url, timeout, Credentials::Include)
    }

    /// Credential-less client with the fixed public timeout.
    pub fn public(base_url: &str) -> Result<Self, HttpError> {
        Self::build(base_url, PUBLIC_TIMEOUT, Credentials::Omit)
    }

    fn build(base_url: &str, timeout: Duration, credentials: Credentials) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            credentials,
            auth_token: Arc::new(RwLock::new(None)),
        })
    }

    /// Start with `token` already set.
    pub(crate) fn with_auth_token(mut self, token: String) -> Self {
        self.auth_token = Arc::new(RwLock::new(Some(token)));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> Credentials {
        self.credentials
    }

    /// Set the auth token (native only — on WASM, cookies handle auth).
    pub(crate) async fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write().await = token;
    }

    pub(crate) async fn clear_auth_token(&self) {
        *self.auth_token.write().await = None;
    }

    pub(crate) async fn has_auth_token(&self) -> bool {
        self.auth_token.read().await.is_some()
    }

    // ── Verbs ────────────────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.send(self.request(Method::GET, url)).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.send(self.request(Method::POST, url).json(body)).await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.send(self.request(Method::PATCH, url).json(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.send(self.request(Method::DELETE, url)).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        url: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, HttpError> {
        self.send(self.request(Method::POST, url).multipart(form))
            .await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        tracing::debug!(method = %method, url, credentials = ?self.credentials, "request");
        let req = self.client.request(method, url);

        #[cfg(target_arch = "wasm32")]
        let req = match self.credentials {
            Credentials::Include => req.fetch_credentials_include(),
            Credentials::Omit => req.fetch_credentials_omit(),
        };

        req
    }

    async fn send<T: DeserializeOwned>(&self, mut req: RequestBuilder) -> Result<T, HttpError> {
        // Inject auth token on native
        #[cfg(not(target_arch = "wasm32"))]
        {
            if self.credentials == Credentials::Include {
                if let Some(token) = self.auth_token.read().await.as_ref() {
                    req = req.header("Authorization", format!("Bearer {}", token));
                }
            }
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status_code, "request failed");

        Err(HttpError::from_status(status_code, body_text))
    }
}

impl Clone for GroupBuyHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            credentials: self.credentials,
            auth_token: self.auth_token.clone(),
        }
    }
}

impl std::fmt::Debug for GroupBuyHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupBuyHttp")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
