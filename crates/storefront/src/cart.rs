//! Session-scoped cart aggregator.
//!
//! The cart is transient: it lives for one customer session, is never
//! persisted, and feeds the order store only at checkout. It holds at most
//! one line per product id; re-adding a product increments its quantity.

use tabletap_core::{LineItem, Price, Product, ProductId};

/// Rejected cart operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("\"{name}\" is currently unavailable")]
    Unavailable { name: String },
}

/// A customer's in-progress selection plus their table association.
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<LineItem>,
    table: Option<String>,
}

impl Cart {
    /// An empty cart with no table association.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of `product`, snapshotting its name, price, and image.
    ///
    /// If the product is already in the cart its quantity is incremented;
    /// the snapshot taken at first add is kept.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Unavailable`] when the product's availability
    /// flag is off; unavailable products cannot enter a cart.
    pub fn add(&mut self, product: &Product) -> Result<(), CartError> {
        if !product.available {
            return Err(CartError::Unavailable {
                name: product.name.clone(),
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.qty += 1;
        } else {
            self.lines.push(LineItem::from_product(product));
        }
        Ok(())
    }

    /// Set a line's quantity explicitly. A quantity of zero removes the
    /// line entirely; an unknown id is a no-op.
    pub fn set_quantity(&mut self, id: &ProductId, qty: u32) {
        if qty == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == *id) {
            line.qty = qty;
        }
    }

    /// Remove a line entirely. An unknown id is a no-op.
    pub fn remove(&mut self, id: &ProductId) {
        self.lines.retain(|l| l.product_id != *id);
    }

    /// Empty the cart and drop the table association.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.table = None;
    }

    /// Associate the serving table, from a query parameter or manual entry.
    /// Blank input clears the association.
    pub fn set_table(&mut self, table: impl Into<String>) {
        let table = table.into();
        let trimmed = table.trim();
        self.table = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        };
    }

    /// The associated table, if set. Checkout requires one.
    #[must_use]
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Current lines, in add order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price * qty` over all lines, recomputed fresh on each call.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(LineItem::line_total).sum()
    }
}
