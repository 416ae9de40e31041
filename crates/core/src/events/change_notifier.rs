use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

use log::debug;
use tokio::sync::broadcast;

const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// Events published on the broadcast side of the notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEvent {
    /// The coin catalog was replaced or extended.
    FullCoinsUpdated,
}

type Callback = Arc<dyn Fn() + Send + Sync>;

struct Registry {
    next_id: AtomicU64,
    callbacks: RwLock<Vec<(u64, Callback)>>,
}

impl Registry {
    fn remove(&self, id: u64) -> bool {
        let mut callbacks = self
            .callbacks
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = callbacks.len();
        callbacks.retain(|(existing, _)| *existing != id);
        callbacks.len() != before
    }

    fn contains(&self, id: u64) -> bool {
        self.callbacks
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .any(|(existing, _)| *existing == id)
    }
}

/// Fan-out of "catalog refreshed" signals.
///
/// Cloning shares the same subscriber set.
#[derive(Clone)]
pub struct CatalogChangeNotifier {
    registry: Arc<Registry>,
    sender: broadcast::Sender<CatalogEvent>,
}

impl Default for CatalogChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogChangeNotifier {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self {
            registry: Arc::new(Registry {
                next_id: AtomicU64::new(0),
                callbacks: RwLock::new(Vec::new()),
            }),
            sender,
        }
    }

    /// Registers a callback run synchronously on every refresh.
    ///
    /// The callback stays registered until the returned handle is dropped
    /// or [`Subscription::unsubscribe`] is called.
    #[must_use = "dropping the subscription unregisters the callback"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry
            .callbacks
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((id, Arc::new(callback)));

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Receiver for async consumers. Lagging receivers miss events.
    pub fn listen(&self) -> broadcast::Receiver<CatalogEvent> {
        self.sender.subscribe()
    }

    /// Runs every registered callback, then publishes on the broadcast channel.
    ///
    /// Callbacks run outside the registry lock, so a callback may subscribe
    /// or unsubscribe without deadlocking. A callback unsubscribed by an
    /// earlier callback in the same round is not called. Callbacks
    /// subscribed during the round are first called on the next one.
    pub fn notify_refreshed(&self) {
        let callbacks: Vec<(u64, Callback)> = self
            .registry
            .callbacks
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .map(|(id, callback)| (*id, Arc::clone(callback)))
            .collect();

        debug!("Notifying {} catalog subscribers", callbacks.len());
        for (id, callback) in callbacks {
            if self.registry.contains(id) {
                callback();
            }
        }

        // No receivers is fine.
        let _ = self.sender.send(CatalogEvent::FullCoinsUpdated);
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry
            .callbacks
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

/// Handle for a registered callback.
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
