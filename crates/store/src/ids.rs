//! Namespaced identifier generation.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;
use uuid::Uuid;

use tabletap_core::{OrderId, ProductId};

/// Produces unique, human-legible identifiers for new entities.
///
/// Uniqueness is assumed global; ordering is only "monotonic enough" for
/// display and is never relied upon for correctness.
pub trait IdGenerator: Send + Sync {
    /// A fresh id in the `PROD-` namespace.
    fn product_id(&self) -> ProductId;

    /// A fresh id in the `ORD-` namespace.
    fn order_id(&self) -> OrderId;
}

/// Production generator: millisecond timestamp plus a random suffix, so ids
/// sort roughly by creation time and stay unique across contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    /// Create the generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn generate(prefix: &str) -> String {
        let suffix: String = Uuid::new_v4().simple().to_string().chars().take(6).collect();
        format!("{prefix}-{}-{suffix}", Utc::now().timestamp_millis())
    }
}

impl IdGenerator for UuidGenerator {
    fn product_id(&self) -> ProductId {
        ProductId::new(Self::generate(ProductId::PREFIX))
    }

    fn order_id(&self) -> OrderId {
        OrderId::new(Self::generate(OrderId::PREFIX))
    }
}

/// Deterministic generator for tests: `PROD-001`, `PROD-002`, ... in the
/// style of the seed catalog's ids.
#[derive(Debug, Default)]
pub struct SequentialGenerator {
    products: AtomicU32,
    orders: AtomicU32,
}

impl SequentialGenerator {
    /// Create a generator starting at 001 in both namespaces.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator whose product ids start after the seed catalog's.
    #[must_use]
    pub fn starting_after_seed(seed_count: u32) -> Self {
        Self {
            products: AtomicU32::new(seed_count),
            orders: AtomicU32::new(0),
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn product_id(&self) -> ProductId {
        let n = self.products.fetch_add(1, Ordering::Relaxed) + 1;
        ProductId::new(format!("{}-{n:03}", ProductId::PREFIX))
    }

    fn order_id(&self) -> OrderId {
        let n = self.orders.fetch_add(1, Ordering::Relaxed) + 1;
        OrderId::new(format!("{}-{n:03}", OrderId::PREFIX))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_uses_namespaces() {
        let ids = UuidGenerator::new();
        assert!(ids.product_id().as_str().starts_with("PROD-"));
        assert!(ids.order_id().as_str().starts_with("ORD-"));
    }

    #[test]
    fn test_uuid_generator_is_unique() {
        let ids = UuidGenerator::new();
        let a = ids.order_id();
        let b = ids.order_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sequential_generator_counts_per_namespace() {
        let ids = SequentialGenerator::new();
        assert_eq!(ids.product_id().as_str(), "PROD-001");
        assert_eq!(ids.product_id().as_str(), "PROD-002");
        assert_eq!(ids.order_id().as_str(), "ORD-001");
    }

    #[test]
    fn test_sequential_generator_can_skip_seed_range() {
        let ids = SequentialGenerator::starting_after_seed(23);
        assert_eq!(ids.product_id().as_str(), "PROD-024");
    }
}
