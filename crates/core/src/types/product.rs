//! Menu products.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::id::ProductId;
use super::price::Price;

/// Dietary tag for a product. Informational only; nothing gates on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProductKind {
    #[default]
    Veg,
    NonVeg,
}

/// A menu product.
///
/// The serialized form is the persisted wire format under the `products`
/// key. `kind` and `image` default when absent so records written before
/// those fields existed still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub image: Option<String>,
    /// Must name a category; orphaned categories are tolerated (no
    /// referential enforcement).
    pub category: Category,
    #[serde(rename = "type", default)]
    pub kind: ProductKind,
    /// Gates whether the product can be added to a cart.
    pub available: bool,
}
