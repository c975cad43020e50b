//! Conversions: order wire types → order view models.

use super::wire::{ApiOrder, ApiOrderItem, ItemStatus};
use super::{DeliveryStatus, Order, OrderItem, OrderStatus};
use crate::domain::refund::convert_refund_type;
use crate::shared::{is_present, line_item_id};

/// Classify an order from its item statuses.
///
/// Refund metadata wins over everything. Otherwise the order is confirmed once
/// every item is resolved, which an empty order is. `FAIL` counts as resolved
/// just like `SUCCESS`: failed group buys are expected to be rare and are
/// shown with the confirmed ones for now.
pub fn determine_order_status(
    item_statuses: impl IntoIterator<Item = ItemStatus>,
    has_refund_info: bool,
) -> OrderStatus {
    if has_refund_info {
        return OrderStatus::RefundPending;
    }

    if item_statuses.into_iter().all(|s| s.is_resolved()) {
        OrderStatus::Confirmed
    } else {
        OrderStatus::InProgress
    }
}

/// Mean achievement rate of the items, `0.0` when there are none.
pub fn progress_rate(items: &[ApiOrderItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    items.iter().map(|i| i.rate).sum::<f64>() / items.len() as f64
}

pub fn convert_order_item(item: &ApiOrderItem) -> OrderItem {
    OrderItem {
        id: line_item_id(item.groupbuy_option_id, item.product_option_id),
        product_id: item.product_option_id.to_string(),
        product_name: item.product_name.clone(),
        product_image: item.option_image.clone(),
        option: item.option_name.clone(),
        quantity: item.quantity,
        price: item.price,
        can_write_review: item.status == ItemStatus::Success,
        // Review linkage is not part of the order payload.
        has_review: false,
        review_id: None,
    }
}

pub fn convert_order(order: &ApiOrder) -> Order {
    let has_refund_info = is_present(&order.refund_type) || is_present(&order.refund_reason);
    let items = order.order_items.iter().map(convert_order_item).collect();
    let is_group_buy = order.order_items.iter().any(|i| i.groupbuy_option_id != 0);
    let status = determine_order_status(order.order_items.iter().map(|i| i.status), has_refund_info);

    Order {
        id: order.order_id.clone(),
        order_number: order.order_id.to_string(),
        order_date: order.created_at,
        status,
        progress_rate: progress_rate(&order.order_items),
        total_amount: order.total_amount,
        // Not supplied by the backend yet.
        shipping_fee: 0,
        items,
        can_refund: order.can_refund_others,
        can_refund_others: order.can_refund_others,
        can_track_delivery: is_present(&order.tracking_number),
        is_group_buy,
        tracking_number: order.tracking_number.clone(),
        delivery_status: DeliveryStatus::Preparing,
        refund_reason: order.refund_reason.clone(),
        refund_type: order
            .refund_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(convert_refund_type),
        refund_deadline: None,
        refund_request_date: None,
    }
}

impl From<&ApiOrderItem> for OrderItem {
    fn from(item: &ApiOrderItem) -> Self {
        convert_order_item(item)
    }
}

impl From<ApiOrderItem> for OrderItem {
    fn from(item: ApiOrderItem) -> Self {
        convert_order_item(&item)
    }
}

impl From<&ApiOrder> for Order {
    fn from(order: &ApiOrder) -> Self {
        convert_order(order)
    }
}

impl From<ApiOrder> for Order {
    fn from(order: ApiOrder) -> Self {
        convert_order(&order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::refund::RefundType;
    use crate::shared::{parse_backend_timestamp, OrderId};

    fn api_item(gb_option: u64, product_option: u64, status: ItemStatus, rate: f64) -> ApiOrderItem {
        ApiOrderItem {
            groupbuy_option_id: gb_option,
            product_option_id: product_option,
            product_name: "시카 리페어 크림".to_string(),
            option_name: "50ml".to_string(),
            option_image: "https://cdn.example.com/cica.jpg".to_string(),
            quantity: 2,
            price: 22800,
            status,
            rate,
        }
    }

    fn api_order(items: Vec<ApiOrderItem>) -> ApiOrder {
        ApiOrder {
            order_id: OrderId::from("ord-1"),
            created_at: parse_backend_timestamp("2025-06-18T09:00:00").unwrap(),
            total_amount: 45600,
            order_items: items,
            can_refund_others: true,
            tracking_number: None,
            refund_type: None,
            refund_reason: None,
        }
    }

    // ── determine_order_status ───────────────────────────────────────────

    #[test]
    fn test_all_resolved_is_confirmed() {
        use ItemStatus::*;
        for statuses in [vec![Success], vec![Fail], vec![Success, Fail, Success]] {
            assert_eq!(determine_order_status(statuses, false), OrderStatus::Confirmed);
        }
    }

    #[test]
    fn test_any_open_is_in_progress() {
        use ItemStatus::*;
        for statuses in [vec![Open], vec![Success, Open], vec![Fail, Success, Open]] {
            assert_eq!(determine_order_status(statuses, false), OrderStatus::InProgress);
        }
    }

    #[test]
    fn test_unknown_status_is_unresolved() {
        let status = determine_order_status([ItemStatus::Success, ItemStatus::Unknown], false);
        assert_eq!(status, OrderStatus::InProgress);
    }

    #[test]
    fn test_refund_info_overrides_items() {
        use ItemStatus::*;
        for statuses in [vec![], vec![Open], vec![Success, Success], vec![Fail]] {
            assert_eq!(determine_order_status(statuses, true), OrderStatus::RefundPending);
        }
    }

    #[test]
    fn test_empty_items_are_confirmed() {
        assert_eq!(determine_order_status(Vec::new(), false), OrderStatus::Confirmed);
    }

    // ── convert_order_item ───────────────────────────────────────────────

    #[test]
    fn test_order_item_composite_id_and_fields() {
        let item = convert_order_item(&api_item(17, 402, ItemStatus::Open, 0.0));
        assert_eq!(item.id, "17-402");
        assert_eq!(item.product_id, "402");
        assert_eq!(item.option, "50ml");
        assert_eq!(item.product_image, "https://cdn.example.com/cica.jpg");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.price, 22800);
        assert!(!item.has_review);
        assert!(item.review_id.is_none());
    }

    #[test]
    fn test_review_only_for_success() {
        assert!(convert_order_item(&api_item(1, 1, ItemStatus::Success, 0.0)).can_write_review);
        assert!(!convert_order_item(&api_item(1, 1, ItemStatus::Fail, 0.0)).can_write_review);
        assert!(!convert_order_item(&api_item(1, 1, ItemStatus::Open, 0.0)).can_write_review);
        assert!(!convert_order_item(&api_item(1, 1, ItemStatus::Unknown, 0.0)).can_write_review);
    }

    // ── convert_order ────────────────────────────────────────────────────

    #[test]
    fn test_progress_rate_is_mean() {
        let order = convert_order(&api_order(vec![
            api_item(1, 10, ItemStatus::Open, 20.0),
            api_item(1, 11, ItemStatus::Open, 60.0),
        ]));
        assert_eq!(order.progress_rate, 40.0);
    }

    #[test]
    fn test_progress_rate_without_items_is_zero() {
        let order = convert_order(&api_order(vec![]));
        assert_eq!(order.progress_rate, 0.0);
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert!(!order.is_group_buy);
    }

    #[test]
    fn test_defaults_and_copied_fields() {
        let order = convert_order(&api_order(vec![api_item(3, 30, ItemStatus::Open, 10.0)]));
        assert_eq!(order.id.as_str(), "ord-1");
        assert_eq!(order.order_number, "ord-1");
        assert_eq!(order.total_amount, 45600);
        assert_eq!(order.shipping_fee, 0);
        assert_eq!(order.delivery_status, DeliveryStatus::Preparing);
        assert!(order.can_refund);
        assert!(order.can_refund_others);
        assert!(!order.can_track_delivery);
        assert!(order.is_group_buy);
        assert_eq!(order.status, OrderStatus::InProgress);
        assert_eq!(order.items.len(), 1);
    }

    #[test]
    fn test_group_buy_flag_needs_nonzero_option() {
        let order = convert_order(&api_order(vec![
            api_item(0, 30, ItemStatus::Success, 0.0),
            api_item(0, 31, ItemStatus::Success, 0.0),
        ]));
        assert!(!order.is_group_buy);

        let order = convert_order(&api_order(vec![
            api_item(0, 30, ItemStatus::Success, 0.0),
            api_item(5, 31, ItemStatus::Success, 0.0),
        ]));
        assert!(order.is_group_buy);
    }

    #[test]
    fn test_tracking_number_enables_tracking() {
        let mut api = api_order(vec![]);
        api.tracking_number = Some("6891-2231-0042".to_string());
        let order = convert_order(&api);
        assert!(order.can_track_delivery);
        assert_eq!(order.tracking_number.as_deref(), Some("6891-2231-0042"));

        api.tracking_number = Some(String::new());
        assert!(!convert_order(&api).can_track_delivery);
    }

    #[test]
    fn test_refund_type_forces_refund_pending() {
        let mut api = api_order(vec![
            api_item(1, 1, ItemStatus::Success, 100.0),
            api_item(1, 2, ItemStatus::Success, 100.0),
        ]);
        api.refund_type = Some("DEFECTIVE_PRODUCT".to_string());
        let order = convert_order(&api);
        assert_eq!(order.status, OrderStatus::RefundPending);
        assert_eq!(order.refund_type, Some(RefundType::DefectiveProduct));
    }

    #[test]
    fn test_refund_reason_alone_forces_refund_pending() {
        let mut api = api_order(vec![api_item(1, 1, ItemStatus::Open, 0.0)]);
        api.refund_reason = Some("상품이 기대와 달라서 환불 신청합니다.".to_string());
        let order = convert_order(&api);
        assert_eq!(order.status, OrderStatus::RefundPending);
        assert!(order.refund_type.is_none());
    }

    #[test]
    fn test_empty_refund_strings_are_ignored() {
        let mut api = api_order(vec![api_item(1, 1, ItemStatus::Open, 0.0)]);
        api.refund_type = Some(String::new());
        api.refund_reason = Some(String::new());
        assert_eq!(convert_order(&api).status, OrderStatus::InProgress);
    }

    #[test]
    fn test_from_impls_match_functions() {
        let api = api_order(vec![api_item(2, 20, ItemStatus::Success, 50.0)]);
        let by_ref: Order = (&api).into();
        let owned: Order = api.clone().into();
        assert_eq!(by_ref, owned);
        assert_eq!(by_ref, convert_order(&api));
    }
}
