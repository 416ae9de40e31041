//! Coin data provider trait definitions.
//!
//! These traits are the transport boundary. Implementations build requests,
//! choose field selections, and decode bodies into the raw models. They do
//! not join, resolve codes or drop records.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{
    ActiveAddressesResponse, AnalyticsRaw, CoinCategoryResponse, CoinPriceResponse,
    DefiMarketInfoResponse, DexLiquiditiesResponse, DexVolumesResponse, FullCoinResponse,
    GlobalMarketPointRaw, MarketInfoOverviewRaw, MarketInfoQuery, MarketInfoRaw,
    TickersResponse, TimePeriod, TransactionsResponse, TvlPointRaw,
};

/// Primary coin data source (coin list, market snapshots, overviews, analytics).
///
/// # Example
///
/// ```ignore
/// use coinkit_market_data::{CoinDataProvider, HsProvider, HsProviderConfig, MarketInfoQuery};
///
/// let provider = HsProvider::new(HsProviderConfig::from_env());
/// let raw = provider
///     .market_infos(&MarketInfoQuery::Top { limit: 100, currency: "usd".into(), defi: false })
///     .await?;
/// ```
#[async_trait]
pub trait CoinDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in errors and logs.
    fn id(&self) -> &'static str;

    /// Full coin list with platform descriptors.
    async fn full_coins(&self) -> Result<Vec<FullCoinResponse>, MarketDataError>;

    /// Every coin category the provider knows about.
    async fn coin_categories(&self) -> Result<Vec<CoinCategoryResponse>, MarketDataError>;

    /// Market snapshot batch for the given query.
    async fn market_infos(
        &self,
        query: &MarketInfoQuery,
    ) -> Result<Vec<MarketInfoRaw>, MarketDataError>;

    async fn defi_market_infos(
        &self,
        currency: &str,
    ) -> Result<Vec<DefiMarketInfoResponse>, MarketDataError>;

    async fn coin_prices(
        &self,
        coin_uids: &[String],
        currency: &str,
    ) -> Result<Vec<CoinPriceResponse>, MarketDataError>;

    async fn market_info_overview(
        &self,
        coin_uid: &str,
        currency: &str,
        language: &str,
    ) -> Result<MarketInfoOverviewRaw, MarketDataError>;

    async fn global_market_points(
        &self,
        currency: &str,
        period: TimePeriod,
    ) -> Result<Vec<GlobalMarketPointRaw>, MarketDataError>;

    async fn market_info_tvl(
        &self,
        coin_uid: &str,
        currency: &str,
        period: TimePeriod,
    ) -> Result<Vec<TvlPointRaw>, MarketDataError>;

    async fn analytics(
        &self,
        coin_uid: &str,
        currency: &str,
    ) -> Result<AnalyticsRaw, MarketDataError>;

    async fn dex_volumes(
        &self,
        coin_uid: &str,
        currency: &str,
        period: TimePeriod,
    ) -> Result<DexVolumesResponse, MarketDataError>;

    async fn dex_liquidities(
        &self,
        coin_uid: &str,
        currency: &str,
        period: TimePeriod,
    ) -> Result<DexLiquiditiesResponse, MarketDataError>;

    async fn transactions(
        &self,
        coin_uid: &str,
        period: TimePeriod,
    ) -> Result<TransactionsResponse, MarketDataError>;

    async fn active_addresses(
        &self,
        coin_uid: &str,
        period: TimePeriod,
    ) -> Result<ActiveAddressesResponse, MarketDataError>;
}

/// Secondary source for exchange tickers, keyed by that provider's own coin id.
#[async_trait]
pub trait TickerProvider: Send + Sync {
    fn id(&self) -> &'static str;

    async fn market_tickers(&self, external_id: &str) -> Result<TickersResponse, MarketDataError>;
}
