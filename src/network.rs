//! Network constants for the group-buy SDK.

use std::time::Duration;

/// Default REST API base URL (routes are appended as `/api/...`).
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variable read by [`GroupBuyClientBuilder::from_env`](crate::client::GroupBuyClientBuilder::from_env).
pub const API_URL_ENV: &str = "GROUPBUY_API_URL";

/// Request timeout for the authenticated client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed request timeout for the public (credential-less) client.
pub const PUBLIC_TIMEOUT: Duration = Duration::from_secs(10);
