//! Placed orders and their line-item snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{OrderId, ProductId};
use super::price::Price;
use super::product::Product;
use super::status::OrderStatus;

/// A (product, quantity) pair inside a cart or a placed order.
///
/// Carries a denormalized snapshot of the product's name, price, and image
/// taken at add time. Once inside a placed order the snapshot is immutable:
/// later catalog edits never retroactively change what was ordered or at
/// what price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image: Option<String>,
    pub qty: u32,
}

impl LineItem {
    /// Snapshot a product into a line item with quantity 1.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            qty: 1,
        }
    }

    /// `price * qty` for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.qty)
    }
}

/// A placed order.
///
/// Created once at checkout; `status` is the only field ever mutated
/// afterward, and only by admin action. The total is always derived from
/// the items, never stored, so it cannot drift from its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Serving location supplied by the customer flow.
    pub table: String,
    /// Immutable snapshot of the cart at the moment of placement.
    pub items: Vec<LineItem>,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Sum of `price * qty` over all items, recomputed on every call.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Whether the order is still in the kitchen's active partition.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }
}
