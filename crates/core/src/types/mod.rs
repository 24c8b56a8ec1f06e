//! Core types for TableTap.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod status;

pub use category::{Category, ordered_for_display};
pub use id::*;
pub use order::{LineItem, Order};
pub use price::Price;
pub use product::{Product, ProductKind};
pub use status::OrderStatus;
