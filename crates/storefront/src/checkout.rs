//! Cart-to-order boundary.

use std::sync::Arc;

use tracing::info;

use tabletap_core::Order;
use tabletap_store::{OrderDraft, OrderError, OrderStore};

use crate::cart::Cart;

/// Rejected checkout conditions. The UI disables the place-order action for
/// the first two; they are still checked here (and again inside the order
/// store) rather than trusted to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("your cart is empty")]
    EmptyCart,
    #[error("enter a table number to place your order")]
    MissingTable,
    #[error(transparent)]
    Store(#[from] OrderError),
}

/// Places orders from carts.
pub struct Checkout {
    orders: Arc<OrderStore>,
}

impl Checkout {
    /// Create a checkout boundary over an order store.
    #[must_use]
    pub fn new(orders: Arc<OrderStore>) -> Self {
        Self { orders }
    }

    /// Snapshot the cart into a new order and clear the cart.
    ///
    /// The snapshot is what makes placed orders immune to later catalog
    /// edits: the order keeps the names and prices the cart saw. The cart
    /// (including its table association) is cleared only on success.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] or [`CheckoutError::MissingTable`]
    /// when the boundary conditions fail, or a store rejection if the order
    /// store refuses the draft.
    pub fn place_order(
        &self,
        cart: &mut Cart,
        notes: Option<String>,
    ) -> Result<Order, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let Some(table) = cart.table() else {
            return Err(CheckoutError::MissingTable);
        };

        let order = self.orders.create_order(OrderDraft {
            table: table.to_owned(),
            items: cart.lines().to_vec(),
            notes,
        })?;

        cart.clear();
        info!(id = %order.id, total = %order.total(), "checkout complete");
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tabletap_core::{Category, OrderStatus, Price, Product, ProductId, ProductKind};
    use tabletap_store::{ChangeNotifier, KeyValueStorage, MemoryStorage, SequentialGenerator};

    fn order_store() -> Arc<OrderStore> {
        Arc::new(OrderStore::new(
            Arc::new(MemoryStorage::new()) as Arc<dyn KeyValueStorage>,
            ChangeNotifier::new(),
            Arc::new(SequentialGenerator::new()),
        ))
    }

    fn product(id: &str, price: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product {id}"),
            description: String::new(),
            price: Price::from(price),
            image: None,
            category: Category::from("Main Courses"),
            kind: ProductKind::Veg,
            available: true,
        }
    }

    #[test]
    fn test_place_order_snapshots_and_clears_cart() {
        let orders = order_store();
        let checkout = Checkout::new(Arc::clone(&orders));

        let mut cart = Cart::new();
        cart.set_table("5");
        cart.add(&product("PROD-001", 220)).unwrap();
        cart.add(&product("PROD-001", 220)).unwrap();

        let order = checkout.place_order(&mut cart, None).unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.table, "5");
        assert_eq!(order.total(), Price::from(440));
        assert!(cart.is_empty());
        assert_eq!(cart.table(), None);
        assert_eq!(orders.last_order_id(), Some(order.id));
    }

    #[test]
    fn test_empty_cart_is_blocked_at_the_boundary() {
        let checkout = Checkout::new(order_store());
        let mut cart = Cart::new();
        cart.set_table("5");

        assert_eq!(
            checkout.place_order(&mut cart, None),
            Err(CheckoutError::EmptyCart)
        );
    }

    #[test]
    fn test_missing_table_is_blocked_and_cart_survives() {
        let checkout = Checkout::new(order_store());
        let mut cart = Cart::new();
        cart.add(&product("PROD-001", 220)).unwrap();

        assert_eq!(
            checkout.place_order(&mut cart, None),
            Err(CheckoutError::MissingTable)
        );
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_notes_reach_the_order() {
        let checkout = Checkout::new(order_store());
        let mut cart = Cart::new();
        cart.set_table("5");
        cart.add(&product("PROD-001", 220)).unwrap();

        let order = checkout
            .place_order(&mut cart, Some("less spicy please".to_owned()))
            .unwrap();
        assert_eq!(order.notes.as_deref(), Some("less spicy please"));
    }
}
