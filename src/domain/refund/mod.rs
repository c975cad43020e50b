//! Refund domain — cancel/refund history view models.

mod convert;
pub mod wire;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub use convert::{convert_refund, convert_refund_item, convert_refund_status, convert_refund_type};
pub use wire::{ApiRefund, ApiRefundItem};

// ─── RefundType ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundType {
    GroupbuyFail,
    ChangeOfMind,
    DefectiveProduct,
    DeliveryIssue,
    Other,
}

impl RefundType {
    /// Map a backend refund type. Unknown values become [`RefundType::Other`].
    pub fn from_backend(raw: &str) -> Self {
        match raw {
            // The backend spells this one differently from the UI.
            "GROUPBUY_FAILED" => Self::GroupbuyFail,
            "CHANGE_OF_MIND" => Self::ChangeOfMind,
            "DEFECTIVE_PRODUCT" => Self::DefectiveProduct,
            "DELIVERY_ISSUE" => Self::DeliveryIssue,
            "OTHER" => Self::Other,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GroupbuyFail => "GROUPBUY_FAIL",
            Self::ChangeOfMind => "CHANGE_OF_MIND",
            Self::DefectiveProduct => "DEFECTIVE_PRODUCT",
            Self::DeliveryIssue => "DELIVERY_ISSUE",
            Self::Other => "OTHER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::GroupbuyFail => "공구 실패",
            Self::ChangeOfMind => "단순 변심",
            Self::DefectiveProduct => "상품 불량",
            Self::DeliveryIssue => "배송 문제",
            Self::Other => "기타",
        }
    }
}

impl std::fmt::Display for RefundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── RefundStatus ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundStatus {
    Approved,
    Completed,
    Rejected,
    Failed,
}

impl RefundStatus {
    /// Map a backend refund status. `PENDING` and unknown values become
    /// [`RefundStatus::Approved`].
    pub fn from_backend(raw: &str) -> Self {
        match raw {
            "APPROVED" | "PENDING" => Self::Approved,
            "COMPLETED" => Self::Completed,
            "REJECTED" => Self::Rejected,
            "FAILED" => Self::Failed,
            _ => Self::Approved,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Completed => "COMPLETED",
            Self::Rejected => "REJECTED",
            Self::Failed => "FAILED",
        }
    }

    /// Whether the refund can still change state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Approved)
    }
}

impl std::fmt::Display for RefundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── RefundScope ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundScope {
    /// Refund of the lines bought in a single group buy.
    #[default]
    IndividualGroupBuy,
}

// ─── Refund ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundItem {
    /// `{groupbuy_option_id}-{product_option_id}`.
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub product_image: String,
    pub option: String,
    pub quantity: u32,
    pub price: i64,
    pub refund_amount: i64,
}

/// A UI-facing refund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub id: String,
    pub payment_id: String,
    pub refund_number: String,
    #[serde(rename = "type")]
    pub refund_type: RefundType,
    pub reason: String,
    pub amount: i64,
    pub status: RefundStatus,
    pub reject_reason: Option<String>,
    pub refunded_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub scope: RefundScope,
    pub items: Vec<RefundItem>,
    pub estimated_completion_date: Option<NaiveDateTime>,
}
