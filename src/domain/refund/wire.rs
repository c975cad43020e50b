//! Wire types for refund history responses.

use crate::shared::serde_util;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single refunded line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRefundItem {
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
}

/// A backend refund record.
///
/// `type` and `status` stay raw strings here; the mapping to UI enums is
/// deliberately lossy and lives in the conversion layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRefund {
    pub refund_id: String,
    #[serde(rename = "type")]
    pub refund_type: String,
    #[serde(default)]
    pub reason: String,
    pub total_amount: i64,
    pub status: String,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default, with = "serde_util::option_backend_datetime")]
    pub refund_at: Option<NaiveDateTime>,
    #[serde(with = "serde_util::backend_datetime")]
    pub created_at: NaiveDateTime,
    #[serde(default, deserialize_with = "serde_util::null_as_default")]
    pub refund_items: Vec<ApiRefundItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_refund_deserialize() {
        let json = r#"{
            "refundId": "rf-77",
            "type": "GROUPBUY_FAILED",
            "reason": "공동구매 인원 미달",
            "totalAmount": 67800,
            "status": "PENDING",
            "rejectionReason": null,
            "refundAt": null,
            "createdAt": "2025-06-12T18:20:00",
            "refundItems": [{
                "groupbuyOptionId": 8,
                "productOptionId": 10,
                "productName": "레드 블레미쉬 수딩 크림",
                "optionName": "50ml",
                "optionImage": "https://cdn.example.com/b.jpg",
                "quantity": 1,
                "price": 67800
            }]
        }"#;
        let refund: ApiRefund = serde_json::from_str(json).unwrap();
        assert_eq!(refund.refund_id, "rf-77");
        assert_eq!(refund.refund_type, "GROUPBUY_FAILED");
        assert!(refund.refund_at.is_none());
        assert_eq!(refund.refund_items.len(), 1);
        assert_eq!(refund.refund_items[0].groupbuy_option_id, 8);
    }
}
