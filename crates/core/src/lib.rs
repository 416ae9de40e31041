//! Coinkit Core - Catalog joins, view assembly and the coin service.
//!
//! This crate combines provider market data from `coinkit-market-data`
//! with the local coin catalog. It is storage-agnostic: the catalog, the
//! category metadata and the exchange metadata are traits implemented by
//! the host application.

pub mod coins;
pub mod errors;
pub mod events;

// Re-export the coin surface
pub use coins::*;
pub use events::{CatalogChangeNotifier, CatalogEvent, Subscription};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
