//! CLI command implementations.

pub mod admin;
pub mod menu;
pub mod order;
pub mod seed;

use std::sync::Arc;

use tabletap_store::{
    CatalogStore, ChangeNotifier, FileStorage, IdGenerator, KeyValueStorage, OrderStore,
    StorageError, UuidGenerator,
};

use crate::config::AppConfig;

/// Shared wiring for every command: a file-backed store under the data
/// directory, one notifier bus, and production id generation.
pub struct Context {
    pub storage: Arc<dyn KeyValueStorage>,
    pub notifier: ChangeNotifier,
    pub catalog: Arc<CatalogStore>,
    pub orders: Arc<OrderStore>,
}

impl Context {
    /// Open the data directory and construct the stores.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(config: &AppConfig) -> Result<Self, StorageError> {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::open(&config.data_dir)?);
        let notifier = ChangeNotifier::new();
        let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator::new());

        let catalog = Arc::new(CatalogStore::new(
            Arc::clone(&storage),
            notifier.clone(),
            Arc::clone(&ids),
        ));
        let orders = Arc::new(OrderStore::new(Arc::clone(&storage), notifier.clone(), ids));

        Ok(Self {
            storage,
            notifier,
            catalog,
            orders,
        })
    }
}
