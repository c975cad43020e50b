//! High-level client — `GroupBuyClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the two transport clients and the accessor
//! methods.

use crate::domain::groupbuy::client::GroupBuys;
use crate::error::SdkError;
use crate::http::GroupBuyHttp;
use crate::network::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::groupbuy::client::GroupBuys as GroupBuysClient;

/// The primary entry point for the group-buy SDK.
///
/// Holds an authenticated transport for user and seller endpoints and a
/// credential-less one for publicly viewable resources.
pub struct GroupBuyClient {
    pub(crate) http: GroupBuyHttp,
    pub(crate) public_http: GroupBuyHttp,
}

impl GroupBuyClient {
    pub fn builder() -> GroupBuyClientBuilder {
        GroupBuyClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn groupbuys(&self) -> GroupBuys<'_> {
        GroupBuys { client: self }
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Set the bearer token sent by the authenticated transport (native only;
    /// on WASM the browser's cookies are used).
    pub async fn set_auth_token(&self, token: impl Into<String>) {
        self.http.set_auth_token(Some(token.into())).await;
    }

    pub async fn clear_auth_token(&self) {
        self.http.clear_auth_token().await;
    }

    pub async fn is_authenticated(&self) -> bool {
        self.http.has_auth_token().await
    }
}

impl Clone for GroupBuyClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            public_http: self.public_http.clone(),
        }
    }
}

impl std::fmt::Debug for GroupBuyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupBuyClient")
            .field("http", &self.http)
            .field("public_http", &self.public_http)
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct GroupBuyClientBuilder {
    base_url: String,
    timeout: Duration,
    auth_token: Option<String>,
}

impl Default for GroupBuyClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            auth_token: None,
        }
    }
}

impl GroupBuyClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Take the base URL from `GROUPBUY_API_URL` when it is set and non-empty.
    pub fn from_env(mut self) -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => self.base_url = url.trim().to_string(),
            _ => tracing::debug!(var = API_URL_ENV, "not set, keeping base url"),
        }
        self
    }

    /// Timeout of the authenticated transport. The public one is fixed.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pre-set the bearer token on construction.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn build(self) -> Result<GroupBuyClient, SdkError> {
        let mut http = GroupBuyHttp::new(&self.base_url, self.timeout)?;
        if let Some(token) = self.auth_token {
            http = http.with_auth_token(token);
        }
        let public_http = GroupBuyHttp::public(&self.base_url)?;
        tracing::debug!(base_url = %http.base_url(), "group-buy client ready");
        Ok(GroupBuyClient { http, public_http })
    }
}
