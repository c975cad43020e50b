//! Wire types for point transaction responses.

use crate::shared::serde_util;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PointTransactionType {
    Used,
    Earned,
    /// Any other backend type. Treated as an accrual.
    #[serde(other)]
    Other,
}

/// A backend point transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointTransactionResponse {
    pub id: u64,
    #[serde(rename = "type")]
    pub transaction_type: PointTransactionType,
    /// `GROUPBUY`, `REVIEW`, `INVITE`, `ADMIN`, `REFUND`, or something newer.
    pub source: String,
    /// Always positive; the sign comes from the transaction type.
    pub amount: i64,
    #[serde(default)]
    pub reason: String,
    #[serde(with = "serde_util::backend_datetime")]
    pub created_at: NaiveDateTime,
}
