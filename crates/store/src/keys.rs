//! Fixed storage key names.
//!
//! These five keys are the durable boundary of the whole system; their
//! serialized shapes are the de facto wire format and must stay stable.

/// Ordered sequence of products. Written by the catalog store.
pub const PRODUCTS: &str = "products";

/// Ordered sequence of category names. Written by the catalog store.
pub const CATEGORIES: &str = "categories";

/// Ordered sequence of orders. Written by the order store.
pub const ORDERS: &str = "orders";

/// Single order id, recorded at checkout so the customer's post-checkout
/// view can find the order it just placed. Stored as a raw string, not JSON.
pub const LAST_ORDER_ID: &str = "lastOrderId";

/// Admin login flag, stored as the literal string `"true"`. Written by the
/// session guard.
pub const IS_ADMIN_LOGGED_IN: &str = "isAdminLoggedIn";
