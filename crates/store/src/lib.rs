//! TableTap Store - persistence and state synchronization.
//!
//! Every durable piece of TableTap state (products, categories, orders, the
//! admin login flag) lives in a key-value store behind the
//! [`KeyValueStorage`] port. Writes go through stateful service objects
//! ([`CatalogStore`], [`OrderStore`]) that read-modify-write whole
//! collections and then publish a [`ChangeEvent`] on the shared
//! [`ChangeNotifier`] bus, telling every other consumer of the same storage
//! to re-read.
//!
//! Two store instances sharing one storage adapter and one notifier model
//! two browser tabs over the same origin: last write wins at the storage
//! layer, and the notifier only promises that consumers are eventually told
//! to re-fetch, never that payloads are authoritative.
//!
//! # Modules
//!
//! - [`storage`] - the key-value port, plus in-memory and file-backed adapters
//! - [`notify`] - the change-notification bus and subscription handles
//! - [`ids`] - namespaced identifier generation
//! - [`catalog`] - products and categories, with additive seed merging
//! - [`orders`] - placed orders and the order lifecycle
//! - [`seed`] - the static default catalog
//! - [`keys`] - the fixed storage key names

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod ids;
pub mod keys;
pub mod notify;
pub mod orders;
pub mod seed;
pub mod storage;

pub use catalog::{CatalogStore, CategoryError, NewProduct, ProductPatch};
pub use ids::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use notify::{ChangeEvent, ChangeNotifier, Subscription};
pub use orders::{OrderDraft, OrderError, OrderStore};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
