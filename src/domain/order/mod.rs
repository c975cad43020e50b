//! Order domain — order history view models and status classification.

mod convert;
pub mod state;
pub mod wire;

use crate::domain::refund::RefundType;
use crate::shared::OrderId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub use convert::{convert_order, convert_order_item, determine_order_status, progress_rate};
pub use state::{ApiOrders, OrderHistory, OrderProvider, StaticOrders};
pub use wire::{ApiOrder, ApiOrderItem, ItemStatus};

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Coarse order status shown in the order list.
///
/// Derived from item statuses and refund metadata; see [`determine_order_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    InProgress,
    Confirmed,
    RefundPending,
    Failed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Confirmed => "confirmed",
            Self::RefundPending => "refund_pending",
            Self::Failed => "failed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "진행중",
            Self::Confirmed => "공구 확정",
            Self::RefundPending => "환불 대기",
            Self::Failed => "공구 실패",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── DeliveryStatus ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    #[default]
    Preparing,
    Shipping,
    Delivered,
    Completed,
}

// ─── OrderItem ───────────────────────────────────────────────────────────────

/// One line of an order as the order list renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// `{groupbuy_option_id}-{product_option_id}`.
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub product_image: String,
    pub option: String,
    pub quantity: u32,
    pub price: i64,
    pub can_write_review: bool,
    pub has_review: bool,
    pub review_id: Option<String>,
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// A UI-facing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub order_date: NaiveDateTime,
    pub status: OrderStatus,
    /// Mean of the item achievement rates, 0–100.
    pub progress_rate: f64,
    pub total_amount: i64,
    pub shipping_fee: i64,
    pub items: Vec<OrderItem>,
    pub can_refund: bool,
    pub can_refund_others: bool,
    pub can_track_delivery: bool,
    pub is_group_buy: bool,
    pub tracking_number: Option<String>,
    pub delivery_status: DeliveryStatus,
    pub refund_reason: Option<String>,
    pub refund_type: Option<RefundType>,
    pub refund_deadline: Option<NaiveDateTime>,
    pub refund_request_date: Option<NaiveDateTime>,
}

impl Order {
    /// Items purchased plus shipping.
    pub fn grand_total(&self) -> i64 {
        self.total_amount + self.shipping_fee
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// ─── OrderStatusSummary ──────────────────────────────────────────────────────

/// Per-status counts for the order/delivery overview.
///
/// Failed orders are not counted: they live in the cancel/refund history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusSummary {
    pub in_progress: usize,
    pub confirmed: usize,
    pub refund_pending: usize,
}

impl OrderStatusSummary {
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        orders
            .into_iter()
            .fold(Self::default(), |mut acc, order| {
                match order.status {
                    OrderStatus::InProgress => acc.in_progress += 1,
                    OrderStatus::Confirmed => acc.confirmed += 1,
                    OrderStatus::RefundPending => acc.refund_pending += 1,
                    OrderStatus::Failed => {}
                }
                acc
            })
    }

    pub fn total(&self) -> usize {
        self.in_progress + self.confirmed + self.refund_pending
    }
}
