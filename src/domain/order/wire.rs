//! Wire types for order history responses.

use crate::shared::{serde_util, OrderId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Per-item group-buy status as the backend reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    /// Group buy still collecting participants.
    Open,
    Success,
    Fail,
    /// Any status this SDK does not know about.
    #[serde(other)]
    Unknown,
}

impl ItemStatus {
    /// `SUCCESS` and `FAIL` both mean the group buy has finished.
    pub fn is_resolved(&self) -> bool {
        matches!(self, ItemStatus::Success | ItemStatus::Fail)
    }
}

/// A single line of a backend order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOrderItem {
    /// `0` for items bought outside a group buy.
    #[serde(default)]
    pub groupbuy_option_id: u64,
    pub product_option_id: u64,
    pub product_name: String,
    #[serde(default)]
    pub option_name: String,
    #[serde(default)]
    pub option_image: String,
    pub quantity: u32,
    pub price: i64,
    pub status: ItemStatus,
    /// Group-buy achievement rate in percent.
    #[serde(default)]
    pub rate: f64,
}

/// A backend order with its items and refund metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOrder {
    pub order_id: OrderId,
    #[serde(with = "serde_util::backend_datetime")]
    pub created_at: NaiveDateTime,
    /// Amount actually paid, discounts already applied.
    pub total_amount: i64,
    #[serde(default, deserialize_with = "serde_util::null_as_default")]
    pub order_items: Vec<ApiOrderItem>,
    #[serde(default)]
    pub can_refund_others: bool,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub refund_type: Option<String>,
    #[serde(default)]
    pub refund_reason: Option<String>,
}
