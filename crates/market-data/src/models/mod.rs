//! Provider payload models
//!
//! This module contains the wire shapes returned by remote coin data
//! providers, plus the closed code vocabularies used to interpret them:
//! - `codes` - `ClosedCode` vocabularies (`TimePeriod`, `LinkType`)
//! - `coin` - Coin list entries, categories and untyped platform descriptors
//! - `market` - Market snapshots, prices, DeFi rows and batch queries
//! - `overview` - Coin detail payload with dynamically keyed maps
//! - `chart` - Chart series payloads and the neutral `ChartPoint`
//! - `analytics` - Analytics sections and rank/value rows
//! - `ticker` - Exchange tickers
//! - `lenient` - Figure decoders tolerant of strings, numbers and out-of-range values

mod analytics;
pub mod codes;
mod chart;
mod coin;
pub mod lenient;
mod market;
mod overview;
mod ticker;

pub use analytics::{
    AddressesRaw, AnalyticsRaw, CountPointRaw, HolderBlockchainRaw, LiquidityRaw,
    RankMultiValueRaw, RankValueRaw, RankedVolumeRaw, RevenueRaw, TransactionsRaw, TvlRaw,
    TvlValuePointRaw, VolumePointRaw,
};
pub use chart::{
    ActiveAddressesResponse, ChartPoint, DexLiquiditiesResponse, DexVolumesResponse,
    GlobalMarketPoint, GlobalMarketPointRaw, ProChartPointRaw, TransactionsResponse, TvlPointRaw,
};
pub use codes::{ClosedCode, LinkType, TimePeriod};
pub use coin::{CoinCategoryResponse, FullCoinResponse, PlatformRaw};
pub use market::{CoinPriceResponse, DefiMarketInfoResponse, MarketInfoQuery, MarketInfoRaw};
pub use overview::{MarketInfoOverviewRaw, OverviewMarketDataRaw};
pub use ticker::{TickerMarketRaw, TickerRaw, TickersResponse};
