//! Order store.
//!
//! Owns the placed-order list. Orders are created once at checkout and
//! never deleted individually; `status` is the only field mutated after
//! creation. The id of the most recently placed order is kept under a
//! separate single-value pointer so the customer's post-checkout view can
//! find it without scanning.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::{error, info};

use tabletap_core::{LineItem, Order, OrderId, OrderStatus};

use crate::ids::IdGenerator;
use crate::keys;
use crate::notify::{ChangeEvent, ChangeNotifier, Subscription};
use crate::storage::{self, KeyValueStorage};

/// Checkout input. The store stamps the id, initial status, and timestamp.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub table: String,
    pub items: Vec<LineItem>,
    pub notes: Option<String>,
}

/// Rejected checkout conditions. The UI blocks these before they reach the
/// store; the store re-checks defensively rather than trusting the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("cannot place an order with no items")]
    EmptyCart,
    #[error("a table number is required before checkout")]
    MissingTable,
}

/// Stateful order service.
pub struct OrderStore {
    storage: Arc<dyn KeyValueStorage>,
    notifier: ChangeNotifier,
    ids: Arc<dyn IdGenerator>,
    state: Mutex<Vec<Order>>,
}

impl OrderStore {
    /// Create the store and read the persisted order list. A removed
    /// `orders` key and an empty persisted list load identically.
    #[must_use]
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        notifier: ChangeNotifier,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let orders: Vec<Order> = storage::read_json_or_default(&*storage, keys::ORDERS);
        Self {
            storage,
            notifier,
            ids,
            state: Mutex::new(orders),
        }
    }

    /// Place an order: stamps a fresh id, `Pending` status, and the
    /// creation timestamp; appends, persists, notifies; records the id
    /// under the last-order pointer.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] for an item-less draft and
    /// [`OrderError::MissingTable`] for a blank table.
    pub fn create_order(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        if draft.items.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        if draft.table.trim().is_empty() {
            return Err(OrderError::MissingTable);
        }

        let order = Order {
            id: self.ids.order_id(),
            table: draft.table.trim().to_owned(),
            items: draft.items,
            status: OrderStatus::Pending,
            notes: draft.notes.filter(|n| !n.trim().is_empty()),
            created_at: Utc::now(),
        };

        let snapshot = {
            let mut orders = self.lock_state();
            orders.push(order.clone());
            orders.clone()
        };
        info!(id = %order.id, table = %order.table, items = order.items.len(), "order placed");
        self.persist(&snapshot);
        self.record_last_order_id(&order.id);
        Ok(order)
    }

    /// Replace the matching order's status. Transitions are not restricted
    /// to forward-only so an admin can correct a mis-click. Returns false
    /// (a silent no-op) if the id is not present.
    pub fn update_status(&self, id: &OrderId, status: OrderStatus) -> bool {
        let snapshot = {
            let mut orders = self.lock_state();
            let Some(order) = orders.iter_mut().find(|o| o.id == *id) else {
                return false;
            };
            order.status = status;
            orders.clone()
        };
        info!(%id, %status, "order status updated");
        self.persist(&snapshot);
        true
    }

    /// Empty the order list and remove the persisted keys entirely.
    /// Removing the key and writing an empty list are equivalent on load.
    pub fn clear_orders(&self) {
        {
            let mut orders = self.lock_state();
            orders.clear();
        }

        for key in [keys::ORDERS, keys::LAST_ORDER_ID] {
            let old_value = self.storage.read(key).ok().flatten();
            if let Err(e) = self.storage.remove(key) {
                error!(key, error = %e, "remove failed; in-memory state is ahead of storage");
                continue;
            }
            self.notifier.publish(&ChangeEvent {
                key: key.to_owned(),
                old_value,
                new_value: None,
            });
        }
        info!("orders cleared");
    }

    /// Current orders (cloned snapshot).
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.lock_state().clone()
    }

    /// Look up an order by id.
    #[must_use]
    pub fn find(&self, id: &OrderId) -> Option<Order> {
        self.lock_state().iter().find(|o| o.id == *id).cloned()
    }

    /// The id recorded by the most recent checkout in any context, read
    /// from storage so a new context sees it too.
    #[must_use]
    pub fn last_order_id(&self) -> Option<OrderId> {
        match self.storage.read(keys::LAST_ORDER_ID) {
            Ok(raw) => raw.filter(|s| !s.is_empty()).map(OrderId::new),
            Err(e) => {
                error!(error = %e, "failed to read last order id");
                None
            }
        }
    }

    /// The order behind [`last_order_id`](Self::last_order_id), if it still
    /// exists.
    #[must_use]
    pub fn last_order(&self) -> Option<Order> {
        let id = self.last_order_id()?;
        self.find(&id)
    }

    /// Re-read the persisted order list. The change-notification path.
    pub fn refresh(&self) {
        let orders: Vec<Order> = storage::read_json_or_default(&*self.storage, keys::ORDERS);
        *self.lock_state() = orders;
    }

    /// Subscribe this store to the `orders` key so cross-context writes are
    /// reconciled automatically.
    #[must_use]
    pub fn watch(self: &Arc<Self>) -> Subscription {
        let weak = Arc::downgrade(self);
        self.notifier.subscribe(keys::ORDERS, move |_event| {
            if let Some(store) = weak.upgrade() {
                store.refresh();
            }
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, Vec<Order>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, orders: &[Order]) {
        let old_value = self.storage.read(keys::ORDERS).ok().flatten();
        match storage::write_json(&*self.storage, keys::ORDERS, &orders) {
            Ok(raw) => self.notifier.publish(&ChangeEvent {
                key: keys::ORDERS.to_owned(),
                old_value,
                new_value: Some(raw),
            }),
            Err(e) => {
                error!(key = keys::ORDERS, error = %e, "write failed; in-memory state is ahead of storage");
            }
        }
    }

    /// The pointer is a raw id string, not JSON, mirroring how the original
    /// storage format recorded it.
    fn record_last_order_id(&self, id: &OrderId) {
        let old_value = self.storage.read(keys::LAST_ORDER_ID).ok().flatten();
        if let Err(e) = self.storage.write(keys::LAST_ORDER_ID, id.as_str()) {
            error!(key = keys::LAST_ORDER_ID, error = %e, "write failed");
            return;
        }
        self.notifier.publish(&ChangeEvent {
            key: keys::LAST_ORDER_ID.to_owned(),
            old_value,
            new_value: Some(id.as_str().to_owned()),
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ids::SequentialGenerator;
    use crate::storage::MemoryStorage;
    use tabletap_core::{Price, ProductId};

    fn new_store() -> (Arc<OrderStore>, Arc<MemoryStorage>, ChangeNotifier) {
        let storage = Arc::new(MemoryStorage::new());
        let notifier = ChangeNotifier::new();
        let store = Arc::new(OrderStore::new(
            Arc::clone(&storage) as Arc<dyn KeyValueStorage>,
            notifier.clone(),
            Arc::new(SequentialGenerator::new()),
        ));
        (store, storage, notifier)
    }

    fn line(id: &str, price: u32, qty: u32) -> LineItem {
        LineItem {
            product_id: ProductId::new(id),
            name: format!("item {id}"),
            price: Price::from(price),
            image: None,
            qty,
        }
    }

    fn draft(table: &str, items: Vec<LineItem>) -> OrderDraft {
        OrderDraft {
            table: table.to_owned(),
            items,
            notes: None,
        }
    }

    #[test]
    fn test_create_order_stamps_pending_and_records_pointer() {
        let (store, storage, _) = new_store();

        let order = store
            .create_order(draft("5", vec![line("PROD-001", 220, 2)]))
            .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total(), Price::from(440));
        assert_eq!(store.last_order_id().as_ref(), Some(&order.id));
        // The pointer is a raw string, not JSON.
        assert_eq!(
            storage.read(keys::LAST_ORDER_ID).unwrap().as_deref(),
            Some(order.id.as_str())
        );
    }

    #[test]
    fn test_create_order_rejects_empty_cart_and_missing_table() {
        let (store, _, _) = new_store();

        assert_eq!(
            store.create_order(draft("5", vec![])),
            Err(OrderError::EmptyCart)
        );
        assert_eq!(
            store.create_order(draft("  ", vec![line("PROD-001", 220, 1)])),
            Err(OrderError::MissingTable)
        );
        assert!(store.orders().is_empty());
    }

    #[test]
    fn test_blank_notes_are_dropped() {
        let (store, _, _) = new_store();

        let order = store
            .create_order(OrderDraft {
                table: "2".to_owned(),
                items: vec![line("PROD-001", 220, 1)],
                notes: Some("   ".to_owned()),
            })
            .unwrap();
        assert_eq!(order.notes, None);
    }

    #[test]
    fn test_update_status_changes_only_status() {
        let (store, _, _) = new_store();
        let order = store
            .create_order(draft("5", vec![line("PROD-001", 220, 2)]))
            .unwrap();

        assert!(store.update_status(&order.id, OrderStatus::Served));

        let updated = store.find(&order.id).unwrap();
        assert_eq!(updated.status, OrderStatus::Served);
        assert_eq!(updated.total(), Price::from(440));
        assert_eq!(updated.items, order.items);
        assert_eq!(updated.created_at, order.created_at);
    }

    #[test]
    fn test_backward_transition_is_permitted() {
        let (store, _, _) = new_store();
        let order = store
            .create_order(draft("5", vec![line("PROD-001", 220, 1)]))
            .unwrap();

        assert!(store.update_status(&order.id, OrderStatus::Served));
        assert!(store.update_status(&order.id, OrderStatus::Preparing));
        assert_eq!(
            store.find(&order.id).unwrap().status,
            OrderStatus::Preparing
        );
    }

    #[test]
    fn test_update_status_on_unknown_id_is_silent_noop() {
        let (store, _, _) = new_store();
        assert!(!store.update_status(&OrderId::new("ORD-999"), OrderStatus::Ready));
    }

    #[test]
    fn test_clear_orders_removes_keys() {
        let (store, storage, _) = new_store();
        store
            .create_order(draft("5", vec![line("PROD-001", 220, 1)]))
            .unwrap();

        store.clear_orders();

        assert!(store.orders().is_empty());
        assert_eq!(storage.read(keys::ORDERS).unwrap(), None);
        assert_eq!(storage.read(keys::LAST_ORDER_ID).unwrap(), None);
        assert_eq!(store.last_order_id(), None);
    }

    #[test]
    fn test_removed_key_and_empty_list_load_identically() {
        let storage = Arc::new(MemoryStorage::new());
        let notifier = ChangeNotifier::new();

        let from_removed = OrderStore::new(
            Arc::clone(&storage) as Arc<dyn KeyValueStorage>,
            notifier.clone(),
            Arc::new(SequentialGenerator::new()),
        );
        assert!(from_removed.orders().is_empty());

        storage.write(keys::ORDERS, "[]").unwrap();
        let from_empty = OrderStore::new(
            Arc::clone(&storage) as Arc<dyn KeyValueStorage>,
            notifier,
            Arc::new(SequentialGenerator::new()),
        );
        assert!(from_empty.orders().is_empty());
    }

    #[test]
    fn test_watching_store_observes_other_context_writes() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let notifier = ChangeNotifier::new();

        let customer_tab = Arc::new(OrderStore::new(
            Arc::clone(&storage),
            notifier.clone(),
            Arc::new(SequentialGenerator::new()),
        ));
        let admin_tab = Arc::new(OrderStore::new(
            Arc::clone(&storage),
            notifier.clone(),
            Arc::new(SequentialGenerator::new()),
        ));
        let _watch = admin_tab.watch();

        let order = customer_tab
            .create_order(draft("7", vec![line("PROD-002", 180, 1)]))
            .unwrap();
        assert!(admin_tab.find(&order.id).is_some());
    }
}
