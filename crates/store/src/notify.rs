//! Change-notification bus.
//!
//! Every write to the key-value store is followed by a [`ChangeEvent`] on
//! the shared [`ChangeNotifier`]. The event names the key that changed and
//! carries the old/new serialized values where the writer had them, but the
//! payload is advisory only: consumers must re-read authoritative state
//! from storage, since not every write path populates the payload uniformly.
//!
//! Delivery is synchronous and in registration order within the publishing
//! context. Writes racing from different contexts carry no cross-context
//! ordering guarantee; last write wins at the storage layer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// A "key changed" announcement.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    /// The storage key that changed.
    pub key: String,
    /// Serialized value before the write, where the writer had it.
    pub old_value: Option<String>,
    /// Serialized value after the write; `None` for a removal.
    pub new_value: Option<String>,
}

type Callback = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

struct Subscriber {
    id: u64,
    key: String,
    callback: Callback,
}

#[derive(Default)]
struct NotifierInner {
    next_id: AtomicU64,
    subscribers: Mutex<Vec<Subscriber>>,
}

/// Process-wide publish/subscribe bus for storage changes.
///
/// Cheaply cloneable; clones share the same subscriber registry, which is
/// how several store instances (the "tabs") end up on one bus.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    inner: Arc<NotifierInner>,
}

impl ChangeNotifier {
    /// Create a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` to run whenever `key` changes.
    ///
    /// The returned [`Subscription`] unsubscribes when dropped.
    #[must_use]
    pub fn subscribe(
        &self,
        key: &str,
        callback: impl Fn(&ChangeEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let mut subscribers = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.push(Subscriber {
            id,
            key: key.to_owned(),
            callback: Arc::new(callback),
        });

        Subscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver `event` to every subscriber of its key.
    ///
    /// The subscriber list is snapshotted before any callback runs, so
    /// callbacks are free to subscribe, unsubscribe, or trigger further
    /// reads without deadlocking the bus.
    pub fn publish(&self, event: &ChangeEvent) {
        let callbacks: Vec<Callback> = {
            let subscribers = self
                .inner
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            subscribers
                .iter()
                .filter(|s| s.key == event.key)
                .map(|s| Arc::clone(&s.callback))
                .collect()
        };

        for callback in callbacks {
            callback(event);
        }
    }
}

/// Handle to an active subscription. Dropping it unsubscribes.
pub struct Subscription {
    inner: Weak<NotifierInner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut subscribers = inner
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            subscribers.retain(|s| s.id != self.id);
        }
    }
}
