//! Order history state — app-owned, built from an injected provider.

use super::wire::ApiOrder;
use super::{Order, OrderStatus, OrderStatusSummary};
use crate::error::SdkError;
use crate::shared::OrderId;

/// Source of the orders shown in the order history.
///
/// Production code wires in a backend-backed provider; previews and tests use
/// [`StaticOrders`]. Nothing in the SDK reaches for fixture data on its own.
pub trait OrderProvider {
    fn orders(&self) -> Result<Vec<Order>, SdkError>;
}

/// Provider over a fixed list of view models.
#[derive(Debug, Clone, Default)]
pub struct StaticOrders(pub Vec<Order>);

impl OrderProvider for StaticOrders {
    fn orders(&self) -> Result<Vec<Order>, SdkError> {
        Ok(self.0.clone())
    }
}

/// Provider over already-fetched backend orders; converts on read.
#[derive(Debug, Clone, Default)]
pub struct ApiOrders(pub Vec<ApiOrder>);

impl OrderProvider for ApiOrders {
    fn orders(&self) -> Result<Vec<Order>, SdkError> {
        Ok(self.0.iter().map(Order::from).collect())
    }
}

impl<F> OrderProvider for F
where
    F: Fn() -> Result<Vec<Order>, SdkError>,
{
    fn orders(&self) -> Result<Vec<Order>, SdkError> {
        self()
    }
}

/// A user's orders split the way the storefront shows them.
///
/// Failed orders are moved out of the order/delivery list into the
/// cancel/refund history.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    active: Vec<Order>,
    failed: Vec<Order>,
}

impl OrderHistory {
    pub fn new(orders: Vec<Order>) -> Self {
        let (failed, active): (Vec<Order>, Vec<Order>) = orders
            .into_iter()
            .partition(|o| o.status == OrderStatus::Failed);
        Self { active, failed }
    }

    pub fn load(provider: &impl OrderProvider) -> Result<Self, SdkError> {
        let orders = provider.orders()?;
        tracing::debug!(count = orders.len(), "loaded order history");
        Ok(Self::new(orders))
    }

    /// Orders for the order/delivery view, in provider order.
    pub fn active(&self) -> &[Order] {
        &self.active
    }

    /// Orders for the cancel/refund view.
    pub fn failed(&self) -> &[Order] {
        &self.failed
    }

    pub fn with_status(&self, status: OrderStatus) -> impl Iterator<Item = &Order> {
        self.active
            .iter()
            .chain(self.failed.iter())
            .filter(move |o| o.status == status)
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.active
            .iter()
            .chain(self.failed.iter())
            .find(|o| &o.id == id)
    }

    pub fn summary(&self) -> OrderStatusSummary {
        OrderStatusSummary::from_orders(&self.active)
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.failed.is_empty()
    }
}
