//! Coinkit Market Data Crate
//!
//! This crate provides the provider-facing half of coinkit: wire models for
//! remote coin data payloads, closed vocabularies for provider string codes,
//! normalization of heterogeneous chart series, and HTTP transports.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |    Provider      | --> |   Raw models     |  (wire shapes, open-ended keys)
//! +------------------+     +------------------+
//!                                  |
//!                   +--------------+--------------+
//!                   v                             v
//!          +------------------+          +------------------+
//!          |    Normalizer    |          |   ClosedCode     |  (code -> enum, partial)
//!          +------------------+          +------------------+
//!                   |                             |
//!                   v                             v
//!          +------------------+          +------------------+
//!          |   ChartPoint     |          | TimePeriod/Link  |
//!          +------------------+          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`CoinDataProvider`] / [`TickerProvider`] - transport boundary
//! - [`MarketInfoRaw`] - market snapshot for one coin
//! - [`MarketInfoOverviewRaw`] - coin detail with dynamically keyed maps
//! - [`ChartPoint`] - neutral chart record
//! - [`ClosedCode`] - code vocabularies ([`TimePeriod`], [`LinkType`])

pub mod errors;
pub mod models;
pub mod normalize;
pub mod provider;

pub use errors::MarketDataError;

pub use models::{
    ActiveAddressesResponse, AnalyticsRaw, ChartPoint, ClosedCode, CoinCategoryResponse,
    CoinPriceResponse, DefiMarketInfoResponse, DexLiquiditiesResponse, DexVolumesResponse,
    FullCoinResponse, GlobalMarketPoint, GlobalMarketPointRaw, LinkType, MarketInfoOverviewRaw,
    MarketInfoQuery, MarketInfoRaw, OverviewMarketDataRaw, PlatformRaw, ProChartPointRaw,
    TickerMarketRaw, TickerRaw, TickersResponse, TimePeriod, TransactionsResponse, TvlPointRaw,
};

pub use normalize::{CoinAnalytics, RankedSeries, RankedValue};

pub use provider::coingecko::CoinGeckoProvider;
pub use provider::hs::{HsProvider, HsProviderConfig};
pub use provider::{CoinDataProvider, TickerProvider};
