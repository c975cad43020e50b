//! Conversions: refund wire types → refund view models.

use super::wire::{ApiRefund, ApiRefundItem};
use super::{Refund, RefundItem, RefundScope, RefundStatus, RefundType};
use crate::shared::line_item_id;

pub fn convert_refund_type(raw: &str) -> RefundType {
    RefundType::from_backend(raw)
}

pub fn convert_refund_status(raw: &str) -> RefundStatus {
    RefundStatus::from_backend(raw)
}

pub fn convert_refund_item(item: &ApiRefundItem) -> RefundItem {
    RefundItem {
        id: line_item_id(item.groupbuy_option_id, item.product_option_id),
        product_id: item.product_option_id.to_string(),
        product_name: item.product_name.clone(),
        product_image: item.option_image.clone(),
        option: item.option_name.clone(),
        quantity: item.quantity,
        price: item.price,
        // No per-line refund amount on the wire.
        refund_amount: item.price,
    }
}

pub fn convert_refund(refund: &ApiRefund) -> Refund {
    Refund {
        id: refund.refund_id.clone(),
        // The backend has no separate payment or refund number yet.
        payment_id: refund.refund_id.clone(),
        refund_number: refund.refund_id.clone(),
        refund_type: convert_refund_type(&refund.refund_type),
        reason: refund.reason.clone(),
        amount: refund.total_amount,
        status: convert_refund_status(&refund.status),
        reject_reason: refund.rejection_reason.clone(),
        refunded_at: refund.refund_at,
        created_at: refund.created_at,
        updated_at: refund.created_at,
        scope: RefundScope::IndividualGroupBuy,
        items: refund.refund_items.iter().map(convert_refund_item).collect(),
        estimated_completion_date: None,
    }
}

impl From<&ApiRefundItem> for RefundItem {
    fn from(item: &ApiRefundItem) -> Self {
        convert_refund_item(item)
    }
}

impl From<&ApiRefund> for Refund {
    fn from(refund: &ApiRefund) -> Self {
        convert_refund(refund)
    }
}

impl From<ApiRefund> for Refund {
    fn from(refund: ApiRefund) -> Self {
        convert_refund(&refund)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::parse_backend_timestamp;

    fn api_refund(refund_type: &str, status: &str) -> ApiRefund {
        ApiRefund {
            refund_id: "rf-100".to_string(),
            refund_type: refund_type.to_string(),
            reason: "상품에 하자가 있어서 환불 신청합니다.".to_string(),
            total_amount: 89000,
            status: status.to_string(),
            rejection_reason: None,
            refund_at: None,
            created_at: parse_backend_timestamp("2025-06-25T11:00:00").unwrap(),
            refund_items: vec![
                ApiRefundItem {
                    groupbuy_option_id: 4,
                    product_option_id: 51,
                    product_name: "그린티 씨드 세럼".to_string(),
                    option_name: "80ml".to_string(),
                    option_image: "https://cdn.example.com/serum.jpg".to_string(),
                    quantity: 1,
                    price: 45000,
                },
                ApiRefundItem {
                    groupbuy_option_id: 4,
                    product_option_id: 52,
                    product_name: "타임 레볼루션 앰플".to_string(),
                    option_name: "50ml".to_string(),
                    option_image: String::new(),
                    quantity: 1,
                    price: 44000,
                },
            ],
        }
    }

    #[test]
    fn test_refund_type_table() {
        assert_eq!(convert_refund_type("GROUPBUY_FAILED"), RefundType::GroupbuyFail);
        assert_eq!(convert_refund_type("CHANGE_OF_MIND"), RefundType::ChangeOfMind);
        assert_eq!(convert_refund_type("DEFECTIVE_PRODUCT"), RefundType::DefectiveProduct);
        assert_eq!(convert_refund_type("DELIVERY_ISSUE"), RefundType::DeliveryIssue);
        assert_eq!(convert_refund_type("OTHER"), RefundType::Other);
    }

    #[test]
    fn test_refund_type_unknown_falls_back_to_other() {
        assert_eq!(convert_refund_type("WRONG_SIZE"), RefundType::Other);
        assert_eq!(convert_refund_type(""), RefundType::Other);
        // Only the backend spelling is recognised.
        assert_eq!(convert_refund_type("GROUPBUY_FAIL"), RefundType::Other);
    }

    #[test]
    fn test_refund_status_table() {
        assert_eq!(convert_refund_status("APPROVED"), RefundStatus::Approved);
        assert_eq!(convert_refund_status("COMPLETED"), RefundStatus::Completed);
        assert_eq!(convert_refund_status("REJECTED"), RefundStatus::Rejected);
        assert_eq!(convert_refund_status("FAILED"), RefundStatus::Failed);
        assert_eq!(convert_refund_status("PENDING"), RefundStatus::Approved);
        assert_eq!(convert_refund_status("ON_HOLD"), RefundStatus::Approved);
    }

    #[test]
    fn test_convert_refund_defaults() {
        let refund = convert_refund(&api_refund("DEFECTIVE_PRODUCT", "COMPLETED"));
        assert_eq!(refund.id, "rf-100");
        assert_eq!(refund.payment_id, "rf-100");
        assert_eq!(refund.refund_number, "rf-100");
        assert_eq!(refund.refund_type, RefundType::DefectiveProduct);
        assert_eq!(refund.status, RefundStatus::Completed);
        assert_eq!(refund.amount, 89000);
        assert_eq!(refund.updated_at, refund.created_at);
        assert_eq!(refund.scope, RefundScope::IndividualGroupBuy);
        assert!(refund.estimated_completion_date.is_none());
        assert!(refund.refunded_at.is_none());
    }

    #[test]
    fn test_convert_refund_items() {
        let refund = convert_refund(&api_refund("OTHER", "APPROVED"));
        let ids: Vec<_> = refund.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["4-51", "4-52"]);
        assert_eq!(refund.items[0].refund_amount, 45000);
        assert_eq!(refund.items[1].refund_amount, refund.items[1].price);
        assert_eq!(refund.items[0].product_image, "https://cdn.example.com/serum.jpg");
    }

    #[test]
    fn test_rejected_refund_keeps_reason_and_date() {
        let mut api = api_refund("CHANGE_OF_MIND", "REJECTED");
        api.rejection_reason = Some("배송 완료 후 7일이 지났습니다.".to_string());
        api.refund_at = parse_backend_timestamp("2025-06-27T10:00:00");
        let refund: Refund = api.into();
        assert_eq!(refund.status, RefundStatus::Rejected);
        assert_eq!(refund.reject_reason.as_deref(), Some("배송 완료 후 7일이 지났습니다."));
        assert!(refund.refunded_at.is_some());
    }
}
