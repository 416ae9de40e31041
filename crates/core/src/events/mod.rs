//! Catalog change signalling.
//!
//! Services call [`CatalogChangeNotifier::notify_refreshed`] after a catalog
//! batch has been persisted. Subscribers either register a synchronous
//! callback or listen on a broadcast receiver.

mod change_notifier;

pub use change_notifier::{CatalogChangeNotifier, CatalogEvent, Subscription};
