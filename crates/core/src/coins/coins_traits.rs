use std::collections::HashMap;

use coinkit_market_data::{ChartPoint, CoinAnalytics, GlobalMarketPoint, TimePeriod};

use super::catalog_joiner::JoinOutcome;
use super::coin_type::CoinType;
use super::coins_model::{
    Coin, CoinCategory, CoinPrice, DefiMarketInfo, FullCoin, MarketInfo, MarketInfoOverview,
    MarketTicker, PlatformCoin,
};
use crate::errors::Result;
use coinkit_market_data::MarketInfoQuery;

/// Trait defining the contract for the coin catalog store.
///
/// Reads are synchronous snapshots. `save_full_coins` must apply the whole
/// batch atomically: either every entry is visible afterwards or none is.
#[async_trait::async_trait]
pub trait CoinRepositoryTrait: Send + Sync {
    /// Entries for the given identifiers. Unknown identifiers are simply absent.
    fn full_coins(&self, coin_uids: &[String]) -> Result<Vec<FullCoin>>;
    /// Name/code search.
    fn search_full_coins(&self, filter: &str, limit: usize) -> Result<Vec<FullCoin>>;
    fn search_coins(&self, filter: &str, limit: usize) -> Result<Vec<Coin>>;
    fn coin(&self, coin_uid: &str) -> Result<Option<Coin>>;
    /// One entry per stored platform matching any of the given types.
    fn platform_coins(&self, coin_types: &[CoinType]) -> Result<Vec<PlatformCoin>>;
    /// Name/code search restricted to platforms of one type code (`erc20`, `bep2`, ...).
    fn search_platform_coins(
        &self,
        platform_type: &str,
        filter: &str,
        limit: usize,
    ) -> Result<Vec<PlatformCoin>>;
    /// Replaces or inserts the given entries. Returns the number written.
    async fn save_full_coins(&self, full_coins: Vec<FullCoin>) -> Result<usize>;
}

/// Category metadata lookup. Best-effort: missing ids are absent from the result.
pub trait CoinCategoryRepositoryTrait: Send + Sync {
    fn coin_categories(&self, uids: &[String]) -> Result<Vec<CoinCategory>>;
}

/// Exchange metadata lookup.
pub trait ExchangeRepositoryTrait: Send + Sync {
    /// Image URL per exchange id, for the ids that have one.
    fn image_urls(&self, exchange_ids: &[String]) -> Result<HashMap<String, String>>;
}

/// Trait defining the contract for coin market operations.
#[async_trait::async_trait]
pub trait CoinServiceTrait: Send + Sync {
    fn full_coins(&self, filter: &str, limit: usize) -> Result<Vec<FullCoin>>;
    fn full_coins_by_uids(&self, coin_uids: &[String]) -> Result<Vec<FullCoin>>;
    fn coins(&self, filter: &str, limit: usize) -> Result<Vec<Coin>>;
    /// Catalog entries owning any of the given platforms, each entry once.
    fn full_coins_by_coin_types(&self, coin_types: &[CoinType]) -> Result<Vec<FullCoin>>;
    fn platform_coin(&self, coin_type: &CoinType) -> Result<Option<PlatformCoin>>;
    fn platform_coins(&self, coin_types: &[CoinType]) -> Result<Vec<PlatformCoin>>;
    fn search_platform_coins(
        &self,
        platform_type: &str,
        filter: &str,
        limit: usize,
    ) -> Result<Vec<PlatformCoin>>;
    /// Like [`platform_coins`](Self::platform_coins), keyed by [`CoinType::id`].
    /// Identifiers that do not parse are skipped.
    fn platform_coins_by_coin_type_ids(&self, coin_type_ids: &[String])
        -> Result<Vec<PlatformCoin>>;

    /// Provider category list ordered by display order.
    async fn coin_categories(&self) -> Result<Vec<CoinCategory>>;

    /// Market snapshot batch joined with the catalog, applying the configured
    /// catalog-failure policy.
    async fn market_infos(&self, query: MarketInfoQuery) -> Result<Vec<MarketInfo>>;
    /// Same as [`market_infos`](Self::market_infos) but leaves the catalog
    /// failure decision to the caller.
    async fn market_infos_outcome(&self, query: MarketInfoQuery)
        -> Result<JoinOutcome<MarketInfo>>;
    async fn market_info_overview(
        &self,
        coin_uid: &str,
        currency: &str,
        language: &str,
    ) -> Result<MarketInfoOverview>;
    async fn market_tickers(&self, coin_uid: &str) -> Result<Vec<MarketTicker>>;
    async fn defi_market_infos(&self, currency: &str) -> Result<Vec<DefiMarketInfo>>;
    async fn coin_prices(&self, coin_uids: &[String], currency: &str) -> Result<Vec<CoinPrice>>;

    async fn global_market_points(
        &self,
        currency: &str,
        period: TimePeriod,
    ) -> Result<Vec<GlobalMarketPoint>>;
    async fn market_info_tvl(
        &self,
        coin_uid: &str,
        currency: &str,
        period: TimePeriod,
    ) -> Result<Vec<ChartPoint>>;
    async fn analytics(&self, coin_uid: &str, currency: &str) -> Result<CoinAnalytics>;
    async fn dex_volume_points(
        &self,
        coin_uid: &str,
        currency: &str,
        period: TimePeriod,
    ) -> Result<Vec<ChartPoint>>;
    async fn dex_liquidity_points(
        &self,
        coin_uid: &str,
        currency: &str,
        period: TimePeriod,
    ) -> Result<Vec<ChartPoint>>;
    async fn transaction_points(
        &self,
        coin_uid: &str,
        period: TimePeriod,
    ) -> Result<Vec<ChartPoint>>;
    async fn active_address_points(
        &self,
        coin_uid: &str,
        period: TimePeriod,
    ) -> Result<Vec<ChartPoint>>;

    /// Persists a freshly fetched catalog batch, then signals subscribers.
    async fn handle_fetched(&self, full_coins: Vec<FullCoin>) -> Result<()>;
    /// Fetches the full coin list and hands it to [`handle_fetched`](Self::handle_fetched).
    async fn sync_full_coins(&self) -> Result<usize>;
}
