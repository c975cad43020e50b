//! # Group-buy SDK
//!
//! A Rust SDK for a group-buy storefront backend, usable on native and WASM
//! targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Newtypes, the response envelope, domain view models and
//!    converters (always available, WASM-safe)
//! 2. **HTTP API** — `GroupBuyHttp`, one request per call, bearer auth
//! 3. **High-Level Client** — `GroupBuyClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use groupbuy_sdk::prelude::*;
//!
//! let client = GroupBuyClient::builder()
//!     .from_env()
//!     .auth_token(token)
//!     .build()?;
//!
//! let top3 = client.groupbuys().fetch_top3().await?.into_data()?;
//! let detail = client.groupbuys().get_detail(GroupBuyId::new(12)).await?.into_data()?;
//! let product = Product::from(detail);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, time parsing and number formatting.
pub mod shared;

/// Domain modules (vertical slices): view models, wire types, conversions, state.
pub mod domain;

/// The `{ success, message, data }` response envelope.
pub mod envelope;

/// Unified SDK error types.
pub mod error;

/// Network URL and timeout constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `GroupBuyClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes and helpers
    pub use crate::shared::{display_won, format_dot_date, CategoryId, GroupBuyId, OrderId};

    // Envelope
    pub use crate::envelope::ApiResponse;

    // Domain types — group buy
    pub use crate::domain::groupbuy::{
        GroupBuyCreateForm, GroupBuyCreateRequest, GroupBuyDetail, GroupBuyStatus,
        GroupBuySummary, OrderItemRequest, RankingSort, SellerGroupBuy, UploadFile,
    };

    // Domain types — order
    pub use crate::domain::order::{
        convert_order, determine_order_status, DeliveryStatus, Order, OrderHistory, OrderItem,
        OrderProvider, OrderStatus, OrderStatusSummary, StaticOrders,
    };

    // Domain types — refund
    pub use crate::domain::refund::{convert_refund, Refund, RefundItem, RefundStatus, RefundType};

    // Domain types — point
    pub use crate::domain::point::{
        convert_point_transaction, group_point_history_by_date, GroupedPointHistory,
        PointHistoryItem, PointHistoryType,
    };

    // Domain types — product page
    pub use crate::domain::product::{
        ImagePager, InFlight, OptionSelection, OrderBoxActions, Product, ProductOption,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{GroupBuyClient, GroupBuyClientBuilder, GroupBuysClient};
}
