//! Wire types for group-buy requests and responses.

use super::GroupBuyStatus;
use crate::envelope::ApiResponse;
use crate::shared::{serde_util, CategoryId, GroupBuyId, OrderId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ─── Listing ─────────────────────────────────────────────────────────────────

/// A group buy as listed on ranking and home-page cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBuySummary {
    pub groupbuy_id: GroupBuyId,
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// List price before any group-buy discount.
    #[serde(default)]
    pub price: i64,
    /// Current discount in percent.
    #[serde(default)]
    pub discount_rate: Option<f64>,
    #[serde(default)]
    pub order_count: u64,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub status: Option<GroupBuyStatus>,
    #[serde(default, with = "serde_util::option_backend_datetime")]
    pub due_date: Option<NaiveDateTime>,
}

/// `data` of the paged listing endpoint: `{ items: [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBuyPage {
    #[serde(default, deserialize_with = "serde_util::null_as_default")]
    pub items: Vec<GroupBuySummary>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

pub type GroupBuyTop3Response = ApiResponse<Vec<GroupBuySummary>>;
pub type GroupBuyPageResponse = ApiResponse<GroupBuyPage>;
/// Listing response with `data.items` lifted into `data`.
pub type GroupBuyRankingResponse = ApiResponse<Vec<GroupBuySummary>>;

// ─── Detail ──────────────────────────────────────────────────────────────────

/// Volume-based discount step: at `count` participants the price drops by `rate` percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountStage {
    pub count: u32,
    pub rate: f64,
}

/// A purchasable option of a group buy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBuyOption {
    pub groupbuy_option_id: u64,
    #[serde(default)]
    pub product_option_id: u64,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub sale_price: Option<i64>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl GroupBuyOption {
    /// Price the buyer pays now.
    pub fn effective_price(&self) -> i64 {
        self.sale_price.unwrap_or(self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBuyDetail {
    pub groupbuy_id: GroupBuyId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "serde_util::null_as_default")]
    pub detail_image_urls: Vec<String>,
    #[serde(default)]
    pub price: i64,
    #[serde(default, deserialize_with = "serde_util::null_as_default")]
    pub discount_stages: Vec<DiscountStage>,
    #[serde(default, deserialize_with = "serde_util::null_as_default")]
    pub options: Vec<GroupBuyOption>,
    #[serde(default, deserialize_with = "serde_util::null_as_default")]
    pub category_ids: Vec<CategoryId>,
    #[serde(default)]
    pub status: Option<GroupBuyStatus>,
    #[serde(default)]
    pub order_count: u64,
    #[serde(default, with = "serde_util::option_backend_datetime")]
    pub due_date: Option<NaiveDateTime>,
}

pub type GroupBuyDetailResponse = ApiResponse<GroupBuyDetail>;

// ─── Create ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProductOption {
    pub product_option_id: u64,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub stock: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProduct {
    pub product_id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "serde_util::null_as_default")]
    pub options: Vec<SellerProductOption>,
}

/// Data backing the seller's group-buy creation form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBuyCreateData {
    #[serde(default, deserialize_with = "serde_util::null_as_default")]
    pub products: Vec<SellerProduct>,
}

pub type GroupBuyCreateResponse = ApiResponse<GroupBuyCreateData>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOptionRequest {
    pub product_option_id: u64,
    pub total_quantity: u32,
}

/// JSON body sent as the `request` part of the create form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBuyCreateRequest {
    pub title: String,
    pub description: String,
    pub product_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// ISO 8601 local date-time.
    pub due_date: String,
    pub discount_stages: Vec<DiscountStage>,
    pub options: Vec<CreateOptionRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBuyCreated {
    pub groupbuy_id: GroupBuyId,
}

pub type GroupBuyCreateApiResponse = ApiResponse<GroupBuyCreated>;

// ─── Orders ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub groupbuy_option_id: u64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub order_items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: OrderId,
    #[serde(default)]
    pub total_amount: Option<i64>,
}

pub type CreateOrderApiResponse = ApiResponse<CreateOrderResponse>;

// ─── Seller management ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: GroupBuyStatus,
}

/// A group buy in the seller's management list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerGroupBuy {
    pub groupbuy_id: GroupBuyId,
    pub title: String,
    pub status: GroupBuyStatus,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub order_count: u64,
    #[serde(default, with = "serde_util::option_backend_datetime")]
    pub due_date: Option<NaiveDateTime>,
}

/// Spring-style page of seller group buys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerGroupBuyPage {
    #[serde(default, deserialize_with = "serde_util::null_as_default")]
    pub content: Vec<SellerGroupBuy>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl SellerGroupBuyPage {
    pub fn count_with_status(&self, status: GroupBuyStatus) -> usize {
        self.content.iter().filter(|g| g.status == status).count()
    }
}

pub type SellerGroupBuyListResponse = ApiResponse<SellerGroupBuyPage>;

/// Response of endpoints whose `data` carries nothing of interest.
pub type EmptyResponse = ApiResponse<serde_json::Value>;
