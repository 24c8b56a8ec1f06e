//! Live order tracking.
//!
//! A read-only view over the customer's most recently placed order. The UI
//! polls this on a timer to refresh the "time since placed" display; the
//! timer itself is a presentation concern, so elapsed time is computed
//! against a caller-supplied `now`.

use chrono::{DateTime, Utc};

use tabletap_core::{Order, Price};
use tabletap_store::OrderStore;

/// Tracking view over a placed order.
#[derive(Debug, Clone)]
pub struct TrackedOrder {
    pub order: Order,
}

impl TrackedOrder {
    /// The order behind the last-checkout pointer, if one exists.
    #[must_use]
    pub fn latest(orders: &OrderStore) -> Option<Self> {
        orders.last_order().map(|order| Self { order })
    }

    /// Progress-bar fill fraction for the current status.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.order.status.progress()
    }

    /// Badge label for the current status.
    #[must_use]
    pub fn status_label(&self) -> String {
        self.order.status.to_string()
    }

    /// Whether the order is still being worked in the kitchen.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.order.is_active()
    }

    /// Whole minutes since the order was placed, floored at zero for clock
    /// skew between contexts.
    #[must_use]
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.order.created_at).num_minutes().max(0)
    }

    /// Derived order total.
    #[must_use]
    pub fn total(&self) -> Price {
        self.order.total()
    }
}
