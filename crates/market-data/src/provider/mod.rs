//! Coin data provider abstractions and implementations.
//!
//! This module contains:
//! - The `CoinDataProvider` and `TickerProvider` traits (the transport boundary)
//! - `HsProvider`, the primary market API client
//! - `CoinGeckoProvider`, the exchange ticker client
//!
//! Providers only fetch and decode. Joining against the catalog, code
//! resolution and record dropping happen in `coinkit-core`.

mod http;
mod traits;

pub mod coingecko;
pub mod hs;

pub use traits::{CoinDataProvider, TickerProvider};
