//! Point domain — point history entries and per-date grouping.

mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

pub use convert::{convert_point_transaction, group_point_history_by_date};
pub use wire::{PointTransactionResponse, PointTransactionType};

// ─── PointSource ─────────────────────────────────────────────────────────────

/// Where a point transaction came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PointSource {
    GroupBuy,
    Review,
    Invite,
    Admin,
    Refund,
    /// A source this SDK does not know; its raw code is shown as-is.
    Unknown(String),
}

impl PointSource {
    pub fn from_backend(raw: &str) -> Self {
        match raw {
            "GROUPBUY" => Self::GroupBuy,
            "REVIEW" => Self::Review,
            "INVITE" => Self::Invite,
            "ADMIN" => Self::Admin,
            "REFUND" => Self::Refund,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::GroupBuy => "공동 구매",
            Self::Review => "리뷰",
            Self::Invite => "초대",
            Self::Admin => "관리자",
            Self::Refund => "환불",
            Self::Unknown(raw) => raw,
        }
    }
}

// ─── PointHistoryType ────────────────────────────────────────────────────────

/// Direction of a history entry. Serializes as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointHistoryType {
    #[serde(rename = "사용")]
    Used,
    #[serde(rename = "적립")]
    Earned,
}

impl PointHistoryType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Used => "사용",
            Self::Earned => "적립",
        }
    }
}

impl From<PointTransactionType> for PointHistoryType {
    fn from(t: PointTransactionType) -> Self {
        match t {
            PointTransactionType::Used => Self::Used,
            PointTransactionType::Earned | PointTransactionType::Other => Self::Earned,
        }
    }
}

// ─── PointHistoryItem ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointHistoryItem {
    pub id: String,
    /// `YYYY.MM.DD`.
    pub date: String,
    #[serde(rename = "type")]
    pub history_type: PointHistoryType,
    /// `"{source label} {type label}"`, e.g. `"리뷰 적립"`.
    pub title: String,
    pub description: String,
    /// Negative for points spent.
    pub amount: i64,
}

/// History entries sharing one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedPointHistory {
    pub date: String,
    pub items: Vec<PointHistoryItem>,
}

impl GroupedPointHistory {
    /// Net change over the day.
    pub fn net_amount(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_labels() {
        assert_eq!(PointSource::from_backend("GROUPBUY").label(), "공동 구매");
        assert_eq!(PointSource::from_backend("REVIEW").label(), "리뷰");
        assert_eq!(PointSource::from_backend("INVITE").label(), "초대");
        assert_eq!(PointSource::from_backend("ADMIN").label(), "관리자");
        assert_eq!(PointSource::from_backend("REFUND").label(), "환불");
    }

    #[test]
    fn test_unknown_source_passes_through() {
        let source = PointSource::from_backend("EVENT");
        assert_eq!(source, PointSource::Unknown("EVENT".to_string()));
        assert_eq!(source.label(), "EVENT");
    }

    #[test]
    fn test_history_type_serializes_as_label() {
        let json = serde_json::to_string(&PointHistoryType::Used).unwrap();
        assert_eq!(json, "\"사용\"");
        assert_eq!(PointHistoryType::from(PointTransactionType::Other), PointHistoryType::Earned);
    }
}
