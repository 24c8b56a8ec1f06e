//! Order fulfillment board.

use std::sync::Arc;

use tabletap_core::{Order, OrderId, OrderStatus};
use tabletap_store::OrderStore;

use crate::session::AdminSession;

/// Kitchen-side view over the order lifecycle.
///
/// Orders partition into active (`status != Served`) and completed
/// (`status == Served`). Reads are open; every mutation demands an
/// [`AdminSession`].
pub struct OrderBoard {
    orders: Arc<OrderStore>,
}

impl OrderBoard {
    /// Wrap an order store.
    #[must_use]
    pub fn new(orders: Arc<OrderStore>) -> Self {
        Self { orders }
    }

    /// Orders still being worked, oldest first (store order).
    #[must_use]
    pub fn active(&self) -> Vec<Order> {
        self.orders
            .orders()
            .into_iter()
            .filter(Order::is_active)
            .collect()
    }

    /// Served orders.
    #[must_use]
    pub fn completed(&self) -> Vec<Order> {
        self.orders
            .orders()
            .into_iter()
            .filter(|o| !o.is_active())
            .collect()
    }

    /// Move an order to the next status in the sequence. Returns the new
    /// status, or `None` if the order is unknown or already `Served`.
    pub fn advance(&self, _session: &AdminSession, id: &OrderId) -> Option<OrderStatus> {
        let next = self.orders.find(id)?.status.next()?;
        self.orders.update_status(id, next).then_some(next)
    }

    /// Set an order's status directly. Any status in the vocabulary is
    /// accepted, including backward moves to correct a mis-click. Returns
    /// false if the id is not present.
    pub fn set_status(&self, _session: &AdminSession, id: &OrderId, status: OrderStatus) -> bool {
        self.orders.update_status(id, status)
    }

    /// Clear the whole order history.
    pub fn clear_all(&self, _session: &AdminSession) {
        self.orders.clear_orders();
    }
}
