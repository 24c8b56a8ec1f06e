//! Product catalog store.
//!
//! Owns the product and category collections. Every mutation is a
//! synchronous read-modify-write of the full in-memory collection followed
//! by a full-collection persist and a change notification. There is no
//! optimistic concurrency token; concurrent writers are last-write-wins,
//! which the single-admin assumption accepts.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{error, info};

use tabletap_core::{Category, Price, Product, ProductId, ProductKind, ordered_for_display};

use crate::ids::IdGenerator;
use crate::keys;
use crate::notify::{ChangeEvent, ChangeNotifier, Subscription};
use crate::seed;
use crate::storage::{self, KeyValueStorage};

/// Input for creating a product. The store assigns the id and defaults
/// `available` to true.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: Option<String>,
    pub category: Category,
    pub kind: ProductKind,
}

/// Shallow-merge patch for [`CatalogStore::update_product`]. `None` fields
/// are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub image: Option<String>,
    pub category: Option<Category>,
    pub kind: Option<ProductKind>,
    pub available: Option<bool>,
}

/// Failure modes for [`CatalogStore::add_category`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("category name cannot be empty")]
    Empty,
    #[error("category already exists as \"{canonical}\"")]
    Duplicate { canonical: Category },
}

#[derive(Default)]
struct CatalogState {
    products: Vec<Product>,
    categories: Vec<Category>,
}

/// Stateful catalog service.
///
/// Construct one per execution context with an injected storage adapter,
/// notifier bus, and id generator; contexts sharing the same adapter and
/// bus observe each other's writes.
pub struct CatalogStore {
    storage: Arc<dyn KeyValueStorage>,
    notifier: ChangeNotifier,
    ids: Arc<dyn IdGenerator>,
    state: Mutex<CatalogState>,
}

impl CatalogStore {
    /// Create the store and run the initial [`load`](Self::load).
    #[must_use]
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        notifier: ChangeNotifier,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let store = Self {
            storage,
            notifier,
            ids,
            state: Mutex::new(CatalogState::default()),
        };
        store.load();
        store
    }

    /// Read persisted state and merge the seed catalog into it.
    ///
    /// The merge is additive and idempotent: seed products whose id is
    /// absent from storage are appended (so a deleted seed product
    /// reappears on the next load), existing records are never overwritten
    /// (so admin edits survive reloads), seed categories are unioned in,
    /// and any category referenced by a product but missing from the list
    /// is back-filled. Persists and notifies only when something changed.
    pub fn load(&self) {
        let mut products: Vec<Product> =
            storage::read_json_or_default(&*self.storage, keys::PRODUCTS);
        let stored_categories: Vec<Category> =
            storage::read_json_or_default(&*self.storage, keys::CATEGORIES);

        let mut products_changed = false;
        let known: HashSet<&str> = products.iter().map(|p| p.id.as_str()).collect();
        let missing: Vec<Product> = seed::seed_products()
            .into_iter()
            .filter(|p| !known.contains(p.id.as_str()))
            .collect();
        drop(known);
        if !missing.is_empty() {
            products.extend(missing);
            products_changed = true;
        }

        // Dedupe whatever storage held, preserving first-seen order.
        let mut categories: Vec<Category> = Vec::with_capacity(stored_categories.len());
        for category in &stored_categories {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }
        let mut categories_changed = categories.len() != stored_categories.len();

        for category in seed::seed_categories() {
            if !categories.contains(&category) {
                categories.push(category);
                categories_changed = true;
            }
        }
        for product in &products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
                categories_changed = true;
            }
        }

        {
            let mut state = self.lock_state();
            state.products = products.clone();
            state.categories = categories.clone();
        }

        if products_changed {
            self.persist(keys::PRODUCTS, &products);
        }
        if categories_changed {
            self.persist(keys::CATEGORIES, &categories);
        }
    }

    /// Re-read persisted state without seed merging. This is the path
    /// change notifications take: the event payload is advisory, so the
    /// consumer re-reads the authoritative collections.
    pub fn refresh(&self) {
        let products: Vec<Product> = storage::read_json_or_default(&*self.storage, keys::PRODUCTS);
        let categories: Vec<Category> =
            storage::read_json_or_default(&*self.storage, keys::CATEGORIES);

        let mut state = self.lock_state();
        state.products = products;
        state.categories = categories;
    }

    /// Subscribe this store to its own keys so cross-context writes are
    /// reconciled automatically. Dropping the returned handles stops the
    /// synchronization.
    #[must_use]
    pub fn watch(self: &Arc<Self>) -> Vec<Subscription> {
        [keys::PRODUCTS, keys::CATEGORIES]
            .into_iter()
            .map(|key| {
                let weak = Arc::downgrade(self);
                self.notifier.subscribe(key, move |_event| {
                    if let Some(store) = weak.upgrade() {
                        store.refresh();
                    }
                })
            })
            .collect()
    }

    /// Current products (cloned snapshot).
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.lock_state().products.clone()
    }

    /// Current categories in stored order (cloned snapshot).
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.lock_state().categories.clone()
    }

    /// Current categories in display order: the preferred menu sections
    /// first, then the rest lexicographically.
    #[must_use]
    pub fn ordered_categories(&self) -> Vec<Category> {
        ordered_for_display(&self.lock_state().categories)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<Product> {
        self.lock_state().products.iter().find(|p| p.id == *id).cloned()
    }

    /// Create a product: assigns a fresh id, defaults `available` to true,
    /// appends, persists, notifies. Returns the created record.
    pub fn add_product(&self, new: NewProduct) -> Product {
        let product = Product {
            id: self.ids.product_id(),
            name: new.name,
            description: new.description,
            price: new.price,
            image: new.image,
            category: new.category,
            kind: new.kind,
            available: true,
        };

        let snapshot = {
            let mut state = self.lock_state();
            state.products.push(product.clone());
            state.products.clone()
        };
        info!(id = %product.id, name = %product.name, "product added");
        self.persist(keys::PRODUCTS, &snapshot);
        product
    }

    /// Shallow-merge `patch` into the matching product. Returns false (a
    /// silent no-op) if the id is not present.
    pub fn update_product(&self, id: &ProductId, patch: ProductPatch) -> bool {
        let snapshot = {
            let mut state = self.lock_state();
            let Some(product) = state.products.iter_mut().find(|p| p.id == *id) else {
                return false;
            };
            if let Some(name) = patch.name {
                product.name = name;
            }
            if let Some(description) = patch.description {
                product.description = description;
            }
            if let Some(price) = patch.price {
                product.price = price;
            }
            if let Some(image) = patch.image {
                product.image = Some(image);
            }
            if let Some(category) = patch.category {
                product.category = category;
            }
            if let Some(kind) = patch.kind {
                product.kind = kind;
            }
            if let Some(available) = patch.available {
                product.available = available;
            }
            state.products.clone()
        };
        self.persist(keys::PRODUCTS, &snapshot);
        true
    }

    /// Remove the matching product. Deletion is immediate and irreversible
    /// from the store's perspective (though a seed product reappears on the
    /// next [`load`](Self::load)). Returns false if the id is not present.
    pub fn delete_product(&self, id: &ProductId) -> bool {
        let snapshot = {
            let mut state = self.lock_state();
            let before = state.products.len();
            state.products.retain(|p| p.id != *id);
            if state.products.len() == before {
                return false;
            }
            state.products.clone()
        };
        info!(%id, "product deleted");
        self.persist(keys::PRODUCTS, &snapshot);
        true
    }

    /// Flip the availability flag. Returns false if the id is not present.
    pub fn toggle_availability(&self, id: &ProductId) -> bool {
        let snapshot = {
            let mut state = self.lock_state();
            let Some(product) = state.products.iter_mut().find(|p| p.id == *id) else {
                return false;
            };
            product.available = !product.available;
            state.products.clone()
        };
        self.persist(keys::PRODUCTS, &snapshot);
        true
    }

    /// Normalize and add a category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::Empty`] for blank input and
    /// [`CategoryError::Duplicate`] (carrying the canonical existing name)
    /// when the normalized name is already present case-insensitively.
    pub fn add_category(&self, name: &str) -> Result<Category, CategoryError> {
        let category = Category::normalized(name).ok_or(CategoryError::Empty)?;

        let snapshot = {
            let mut state = self.lock_state();
            if let Some(existing) = state
                .categories
                .iter()
                .find(|c| c.as_str().eq_ignore_ascii_case(category.as_str()))
            {
                return Err(CategoryError::Duplicate {
                    canonical: existing.clone(),
                });
            }
            state.categories.push(category.clone());
            state.categories.clone()
        };
        info!(name = %category, "category added");
        self.persist(keys::CATEGORIES, &snapshot);
        Ok(category)
    }

    fn lock_state(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Persist a collection and announce the change. A failed write is
    /// logged and the in-memory view keeps the unpersisted update; a
    /// reload at that point loses it.
    fn persist<T: Serialize>(&self, key: &'static str, value: &T) {
        let old_value = self.storage.read(key).ok().flatten();
        match storage::write_json(&*self.storage, key, value) {
            Ok(raw) => self.notifier.publish(&ChangeEvent {
                key: key.to_owned(),
                old_value,
                new_value: Some(raw),
            }),
            Err(e) => error!(key, error = %e, "write failed; in-memory state is ahead of storage"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ids::SequentialGenerator;
    use crate::storage::MemoryStorage;

    fn new_store() -> (Arc<CatalogStore>, Arc<MemoryStorage>, ChangeNotifier) {
        let storage = Arc::new(MemoryStorage::new());
        let notifier = ChangeNotifier::new();
        let ids = Arc::new(SequentialGenerator::starting_after_seed(23));
        let store = Arc::new(CatalogStore::new(
            Arc::clone(&storage) as Arc<dyn KeyValueStorage>,
            notifier.clone(),
            ids,
        ));
        (store, storage, notifier)
    }

    fn sample_new_product() -> NewProduct {
        NewProduct {
            name: "Tomato Soup".to_owned(),
            description: "Slow-roasted tomatoes with cream".to_owned(),
            price: Price::from(110),
            image: None,
            category: Category::from("Starters"),
            kind: ProductKind::Veg,
        }
    }

    #[test]
    fn test_empty_store_is_seeded() {
        let (store, storage, _) = new_store();

        assert_eq!(store.products().len(), 23);
        assert_eq!(store.categories().len(), 4);
        // Seeding persisted both collections.
        assert!(storage.read(keys::PRODUCTS).unwrap().is_some());
        assert!(storage.read(keys::CATEGORIES).unwrap().is_some());
    }

    #[test]
    fn test_double_load_is_idempotent() {
        let (store, _, _) = new_store();
        let first = store.products();

        store.load();
        assert_eq!(store.products(), first);
        assert_eq!(store.categories().len(), 4);
    }

    #[test]
    fn test_admin_edits_survive_reload() {
        let (store, _, _) = new_store();
        let id = ProductId::new("PROD-001");

        assert!(store.update_product(
            &id,
            ProductPatch {
                price: Some(Price::from(399)),
                ..ProductPatch::default()
            },
        ));

        store.load();
        assert_eq!(store.find(&id).unwrap().price, Price::from(399));
    }

    #[test]
    fn test_deleted_seed_product_reappears_on_load() {
        let (store, _, _) = new_store();
        let id = ProductId::new("PROD-001");

        assert!(store.delete_product(&id));
        assert!(store.find(&id).is_none());

        store.load();
        assert!(store.find(&id).is_some());
    }

    #[test]
    fn test_deleted_custom_product_stays_deleted() {
        let (store, _, _) = new_store();
        let created = store.add_product(sample_new_product());

        assert!(store.delete_product(&created.id));
        store.load();
        assert!(store.find(&created.id).is_none());
    }

    #[test]
    fn test_add_product_assigns_id_and_availability() {
        let (store, _, _) = new_store();
        let created = store.add_product(sample_new_product());

        assert_eq!(created.id.as_str(), "PROD-024");
        assert!(created.available);
        assert_eq!(store.products().len(), 24);
    }

    #[test]
    fn test_mutations_on_unknown_id_are_silent_noops() {
        let (store, _, _) = new_store();
        let ghost = ProductId::new("PROD-999");

        assert!(!store.update_product(&ghost, ProductPatch::default()));
        assert!(!store.delete_product(&ghost));
        assert!(!store.toggle_availability(&ghost));
        assert_eq!(store.products().len(), 23);
    }

    #[test]
    fn test_toggle_availability_flips() {
        let (store, _, _) = new_store();
        let id = ProductId::new("PROD-002");

        assert!(store.toggle_availability(&id));
        assert!(!store.find(&id).unwrap().available);
        assert!(store.toggle_availability(&id));
        assert!(store.find(&id).unwrap().available);
    }

    #[test]
    fn test_add_category_normalizes_and_dedupes() {
        let (store, _, _) = new_store();

        let added = store.add_category("soups").unwrap();
        assert_eq!(added.as_str(), "Soups");

        let err = store.add_category("Soups ").unwrap_err();
        assert_eq!(
            err,
            CategoryError::Duplicate {
                canonical: Category::from("Soups")
            }
        );

        let soups: Vec<Category> = store
            .categories()
            .into_iter()
            .filter(|c| c.as_str().eq_ignore_ascii_case("soups"))
            .collect();
        assert_eq!(soups.len(), 1);
    }

    #[test]
    fn test_add_category_rejects_blank_input() {
        let (store, _, _) = new_store();
        assert_eq!(store.add_category("   "), Err(CategoryError::Empty));
    }

    #[test]
    fn test_load_backfills_category_referenced_by_product() {
        let storage = Arc::new(MemoryStorage::new());
        let mut products = seed::seed_products();
        if let Some(first) = products.first_mut() {
            first.category = Category::from("Chef Specials");
        }
        storage::write_json(&*storage, keys::PRODUCTS, &products).unwrap();

        let store = CatalogStore::new(
            Arc::clone(&storage) as Arc<dyn KeyValueStorage>,
            ChangeNotifier::new(),
            Arc::new(SequentialGenerator::new()),
        );

        assert!(
            store
                .categories()
                .contains(&Category::from("Chef Specials"))
        );
    }

    #[test]
    fn test_mutation_publishes_change_event() {
        let (store, _, notifier) = new_store();
        let events = Arc::new(Mutex::new(Vec::new()));

        let events_clone = Arc::clone(&events);
        let _sub = notifier.subscribe(keys::PRODUCTS, move |event| {
            events_clone.lock().unwrap().push(event.key.clone());
        });

        store.add_product(sample_new_product());
        assert_eq!(*events.lock().unwrap(), vec![keys::PRODUCTS.to_owned()]);
    }

    #[test]
    fn test_watching_store_observes_other_context_writes() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let notifier = ChangeNotifier::new();

        let admin_tab = Arc::new(CatalogStore::new(
            Arc::clone(&storage),
            notifier.clone(),
            Arc::new(SequentialGenerator::starting_after_seed(23)),
        ));
        let customer_tab = Arc::new(CatalogStore::new(
            Arc::clone(&storage),
            notifier.clone(),
            Arc::new(SequentialGenerator::starting_after_seed(23)),
        ));
        let _watch = customer_tab.watch();

        let created = admin_tab.add_product(sample_new_product());
        assert!(customer_tab.find(&created.id).is_some());
    }
}
