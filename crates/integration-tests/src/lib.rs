//! Integration tests for TableTap.
//!
//! The tests exercise whole-system flows over shared storage: a customer
//! "tab" and an admin "tab" each hold their own store instances wired to
//! one storage adapter and one change-notification bus, which is exactly
//! how two browser tabs over the same origin relate.
//!
//! # Test Categories
//!
//! - `place_and_track` - cart to checkout to kitchen board to tracking
//! - `cross_context_sync` - change notifications between contexts
//! - `catalog_seeding` - seed merge, re-seeding, and snapshot isolation
//! - `file_persistence` - durability over the file-backed adapter

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tabletap_store::{
    CatalogStore, ChangeNotifier, IdGenerator, KeyValueStorage, MemoryStorage, OrderStore,
    SequentialGenerator,
};

/// One execution context ("tab"): its own store instances over shared
/// storage and a shared bus.
pub struct TestContext {
    pub catalog: Arc<CatalogStore>,
    pub orders: Arc<OrderStore>,
    pub storage: Arc<dyn KeyValueStorage>,
    pub notifier: ChangeNotifier,
}

impl TestContext {
    /// A fresh context over fresh in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let notifier = ChangeNotifier::new();
        Self::over(storage, notifier)
    }

    /// Another context over the same storage and bus - a second tab.
    #[must_use]
    pub fn another_tab(&self) -> Self {
        Self::over(Arc::clone(&self.storage), self.notifier.clone())
    }

    fn over(storage: Arc<dyn KeyValueStorage>, notifier: ChangeNotifier) -> Self {
        let ids: Arc<dyn IdGenerator> = Arc::new(SequentialGenerator::starting_after_seed(23));
        let catalog = Arc::new(CatalogStore::new(
            Arc::clone(&storage),
            notifier.clone(),
            Arc::clone(&ids),
        ));
        let orders = Arc::new(OrderStore::new(Arc::clone(&storage), notifier.clone(), ids));
        Self {
            catalog,
            orders,
            storage,
            notifier,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
