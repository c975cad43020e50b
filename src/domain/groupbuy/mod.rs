//! Group-buy domain — listing, detail, creation, ordering, seller management.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

pub use wire::{
    CreateOrderRequest, CreateOrderResponse, GroupBuyCreateData, GroupBuyCreateRequest,
    GroupBuyDetail, GroupBuyOption, GroupBuyPage, GroupBuySummary, OrderItemRequest,
    SellerGroupBuy, SellerGroupBuyPage,
};

// ─── GroupBuyStatus ──────────────────────────────────────────────────────────

/// Lifecycle of a group buy as the seller manages it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupBuyStatus {
    Open,
    Closed,
    Draft,
}

impl GroupBuyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Draft => "DRAFT",
        }
    }
}

impl std::fmt::Display for GroupBuyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── RankingSort ─────────────────────────────────────────────────────────────

/// Sort key of the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankingSort {
    OrderCount,
    Deadline,
}

impl RankingSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrderCount => "order_count",
            Self::Deadline => "deadline",
        }
    }
}

/// Number of entries the ranking pages ask for.
pub const RANKING_LIMIT: u32 = 100;

// ─── Uploads ─────────────────────────────────────────────────────────────────

/// An in-memory file for multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    /// MIME type, e.g. `image/jpeg`.
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

/// Everything `POST /api/groupbuys` takes.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBuyCreateForm {
    pub request: GroupBuyCreateRequest,
    pub thumbnail: UploadFile,
    pub detail_images: Vec<UploadFile>,
}
