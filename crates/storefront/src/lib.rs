//! TableTap Storefront - the customer surface.
//!
//! Everything a diner touches between scanning the table code and watching
//! their food arrive: the menu grouped into sections, the session-scoped
//! cart, checkout into the order store, and live order tracking.
//!
//! # Modules
//!
//! - [`cart`] - session-scoped cart aggregator (never persisted)
//! - [`menu`] - catalog view grouped by display-ordered categories
//! - [`checkout`] - cart-to-order boundary
//! - [`tracking`] - progress view over the last placed order

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod menu;
pub mod tracking;

pub use cart::{Cart, CartError};
pub use checkout::{Checkout, CheckoutError};
pub use menu::{MenuSection, menu};
pub use tracking::TrackedOrder;
