use log::{debug, info, warn};
use std::sync::Arc;

use coinkit_market_data::normalize::{global_market_points, tvl_points};
use coinkit_market_data::{
    ChartPoint, CoinAnalytics, CoinDataProvider, GlobalMarketPoint, MarketInfoQuery,
    TickerProvider, TimePeriod,
};

use super::catalog_joiner::{CatalogFailurePolicy, CatalogJoiner, JoinOutcome};
use super::coin_type::CoinType;
use super::coins_model::{
    Coin, CoinCategory, CoinPrice, DefiMarketInfo, FullCoin, MarketInfo, MarketInfoOverview,
    MarketTicker, PlatformCoin,
};
use super::coins_traits::{
    CoinCategoryRepositoryTrait, CoinRepositoryTrait, CoinServiceTrait, ExchangeRepositoryTrait,
};
use super::view_assembler::{assemble_overview, assemble_tickers};
use crate::errors::{Result, ValidationError};
use crate::events::CatalogChangeNotifier;

fn validate_query(query: &MarketInfoQuery) -> Result<()> {
    if query.currency().trim().is_empty() {
        return Err(ValidationError::MissingField("currency".to_string()).into());
    }
    if let MarketInfoQuery::Category { uid, .. } = query {
        if uid.trim().is_empty() {
            return Err(ValidationError::MissingField("category uid".to_string()).into());
        }
    }
    Ok(())
}

/// Tunables for [`CoinService`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoinServiceConfig {
    pub catalog_failure_policy: CatalogFailurePolicy,
}

/// Service combining the coin catalog with live provider data.
pub struct CoinService {
    coin_repository: Arc<dyn CoinRepositoryTrait>,
    category_repository: Arc<dyn CoinCategoryRepositoryTrait>,
    exchange_repository: Arc<dyn ExchangeRepositoryTrait>,
    provider: Arc<dyn CoinDataProvider>,
    ticker_provider: Arc<dyn TickerProvider>,
    notifier: CatalogChangeNotifier,
    joiner: CatalogJoiner,
    config: CoinServiceConfig,
}

impl CoinService {
    pub fn new(
        coin_repository: Arc<dyn CoinRepositoryTrait>,
        category_repository: Arc<dyn CoinCategoryRepositoryTrait>,
        exchange_repository: Arc<dyn ExchangeRepositoryTrait>,
        provider: Arc<dyn CoinDataProvider>,
        ticker_provider: Arc<dyn TickerProvider>,
        notifier: CatalogChangeNotifier,
    ) -> Self {
        Self::with_config(
            coin_repository,
            category_repository,
            exchange_repository,
            provider,
            ticker_provider,
            notifier,
            CoinServiceConfig::default(),
        )
    }

    pub fn with_config(
        coin_repository: Arc<dyn CoinRepositoryTrait>,
        category_repository: Arc<dyn CoinCategoryRepositoryTrait>,
        exchange_repository: Arc<dyn ExchangeRepositoryTrait>,
        provider: Arc<dyn CoinDataProvider>,
        ticker_provider: Arc<dyn TickerProvider>,
        notifier: CatalogChangeNotifier,
        config: CoinServiceConfig,
    ) -> Self {
        Self {
            joiner: CatalogJoiner::new(coin_repository.clone()),
            coin_repository,
            category_repository,
            exchange_repository,
            provider,
            ticker_provider,
            notifier,
            config,
        }
    }

    pub fn notifier(&self) -> &CatalogChangeNotifier {
        &self.notifier
    }

    /// Catalog lookup for the ticker path, subject to the failure policy.
    fn coin_for_tickers(&self, coin_uid: &str) -> Result<Option<Coin>> {
        match self.coin_repository.coin(coin_uid) {
            Ok(coin) => Ok(coin),
            Err(err) => match self.config.catalog_failure_policy {
                CatalogFailurePolicy::Propagate => Err(err),
                CatalogFailurePolicy::Degrade => {
                    warn!("Catalog lookup for '{}' failed, no tickers: {}", coin_uid, err);
                    Ok(None)
                }
            },
        }
    }
}

#[async_trait::async_trait]
impl CoinServiceTrait for CoinService {
    fn full_coins(&self, filter: &str, limit: usize) -> Result<Vec<FullCoin>> {
        self.coin_repository.search_full_coins(filter, limit)
    }

    fn full_coins_by_uids(&self, coin_uids: &[String]) -> Result<Vec<FullCoin>> {
        self.coin_repository.full_coins(coin_uids)
    }

    fn coins(&self, filter: &str, limit: usize) -> Result<Vec<Coin>> {
        self.coin_repository.search_coins(filter, limit)
    }

    fn full_coins_by_coin_types(&self, coin_types: &[CoinType]) -> Result<Vec<FullCoin>> {
        if coin_types.is_empty() {
            return Ok(Vec::new());
        }
        let mut coin_uids: Vec<String> = self
            .coin_repository
            .platform_coins(coin_types)?
            .into_iter()
            .map(|platform_coin| platform_coin.coin.uid)
            .collect();
        coin_uids.sort();
        coin_uids.dedup();
        if coin_uids.is_empty() {
            return Ok(Vec::new());
        }
        self.coin_repository.full_coins(&coin_uids)
    }

    fn platform_coin(&self, coin_type: &CoinType) -> Result<Option<PlatformCoin>> {
        Ok(self
            .coin_repository
            .platform_coins(std::slice::from_ref(coin_type))?
            .into_iter()
            .next())
    }

    fn platform_coins(&self, coin_types: &[CoinType]) -> Result<Vec<PlatformCoin>> {
        if coin_types.is_empty() {
            return Ok(Vec::new());
        }
        self.coin_repository.platform_coins(coin_types)
    }

    fn search_platform_coins(
        &self,
        platform_type: &str,
        filter: &str,
        limit: usize,
    ) -> Result<Vec<PlatformCoin>> {
        self.coin_repository
            .search_platform_coins(platform_type, filter, limit)
    }

    fn platform_coins_by_coin_type_ids(
        &self,
        coin_type_ids: &[String],
    ) -> Result<Vec<PlatformCoin>> {
        let coin_types: Vec<CoinType> = coin_type_ids
            .iter()
            .filter_map(|id| {
                let coin_type = CoinType::from_id(id);
                if coin_type.is_none() {
                    debug!("Skipping malformed coin type id '{}'", id);
                }
                coin_type
            })
            .collect();
        self.platform_coins(&coin_types)
    }

    async fn coin_categories(&self) -> Result<Vec<CoinCategory>> {
        let responses = self.provider.coin_categories().await?;
        let mut categories: Vec<CoinCategory> =
            responses.into_iter().map(CoinCategory::from).collect();
        categories.sort_by_key(|category| category.order);
        debug!(
            "Fetched {} categories from {}",
            categories.len(),
            self.provider.id()
        );
        Ok(categories)
    }

    async fn market_infos(&self, query: MarketInfoQuery) -> Result<Vec<MarketInfo>> {
        self.market_infos_outcome(query)
            .await?
            .resolve(self.config.catalog_failure_policy)
    }

    async fn market_infos_outcome(
        &self,
        query: MarketInfoQuery,
    ) -> Result<JoinOutcome<MarketInfo>> {
        validate_query(&query)?;
        if let MarketInfoQuery::Coins { uids, .. } = &query {
            if uids.is_empty() {
                return Ok(JoinOutcome::Joined(Vec::new()));
            }
        }

        let raw_records = self.provider.market_infos(&query).await?;
        debug!(
            "Fetched {} market records from {}",
            raw_records.len(),
            self.provider.id()
        );
        Ok(self.joiner.join(raw_records))
    }

    async fn market_info_overview(
        &self,
        coin_uid: &str,
        currency: &str,
        language: &str,
    ) -> Result<MarketInfoOverview> {
        let raw = self
            .provider
            .market_info_overview(coin_uid, currency, language)
            .await?;
        Ok(assemble_overview(raw, self.category_repository.as_ref()))
    }

    async fn market_tickers(&self, coin_uid: &str) -> Result<Vec<MarketTicker>> {
        let external_id = match self
            .coin_for_tickers(coin_uid)?
            .and_then(|coin| coin.coingecko_id)
        {
            Some(id) => id,
            None => {
                debug!("No ticker provider id for '{}'", coin_uid);
                return Ok(Vec::new());
            }
        };

        let response = self.ticker_provider.market_tickers(&external_id).await?;

        let exchange_ids = response.exchange_ids();
        let image_urls = match self.exchange_repository.image_urls(&exchange_ids) {
            Ok(urls) => urls,
            Err(err) => {
                warn!("Exchange image lookup failed: {}", err);
                Default::default()
            }
        };

        Ok(assemble_tickers(response, &image_urls))
    }

    async fn defi_market_infos(&self, currency: &str) -> Result<Vec<DefiMarketInfo>> {
        let raw_records = self.provider.defi_market_infos(currency).await?;
        self.joiner
            .join_defi(raw_records)
            .resolve(self.config.catalog_failure_policy)
    }

    async fn coin_prices(&self, coin_uids: &[String], currency: &str) -> Result<Vec<CoinPrice>> {
        if coin_uids.is_empty() {
            return Ok(Vec::new());
        }
        let responses = self.provider.coin_prices(coin_uids, currency).await?;
        Ok(responses
            .into_iter()
            .filter_map(|response| CoinPrice::from_response(response, currency))
            .collect())
    }

    async fn global_market_points(
        &self,
        currency: &str,
        period: TimePeriod,
    ) -> Result<Vec<GlobalMarketPoint>> {
        let raw_points = self.provider.global_market_points(currency, period).await?;
        Ok(global_market_points(&raw_points))
    }

    async fn market_info_tvl(
        &self,
        coin_uid: &str,
        currency: &str,
        period: TimePeriod,
    ) -> Result<Vec<ChartPoint>> {
        let raw_points = self
            .provider
            .market_info_tvl(coin_uid, currency, period)
            .await?;
        Ok(tvl_points(&raw_points))
    }

    async fn analytics(&self, coin_uid: &str, currency: &str) -> Result<CoinAnalytics> {
        let raw = self.provider.analytics(coin_uid, currency).await?;
        Ok(CoinAnalytics::from(raw))
    }

    async fn dex_volume_points(
        &self,
        coin_uid: &str,
        currency: &str,
        period: TimePeriod,
    ) -> Result<Vec<ChartPoint>> {
        let response = self.provider.dex_volumes(coin_uid, currency, period).await?;
        Ok(response.volume_points())
    }

    async fn dex_liquidity_points(
        &self,
        coin_uid: &str,
        currency: &str,
        period: TimePeriod,
    ) -> Result<Vec<ChartPoint>> {
        let response = self
            .provider
            .dex_liquidities(coin_uid, currency, period)
            .await?;
        Ok(response.volume_points())
    }

    async fn transaction_points(
        &self,
        coin_uid: &str,
        period: TimePeriod,
    ) -> Result<Vec<ChartPoint>> {
        let response = self.provider.transactions(coin_uid, period).await?;
        Ok(response.count_points())
    }

    async fn active_address_points(
        &self,
        coin_uid: &str,
        period: TimePeriod,
    ) -> Result<Vec<ChartPoint>> {
        let response = self.provider.active_addresses(coin_uid, period).await?;
        Ok(response.count_points())
    }

    async fn handle_fetched(&self, full_coins: Vec<FullCoin>) -> Result<()> {
        let saved = self.coin_repository.save_full_coins(full_coins).await?;
        info!("Saved {} coins to catalog", saved);
        self.notifier.notify_refreshed();
        Ok(())
    }

    async fn sync_full_coins(&self) -> Result<usize> {
        let responses = self.provider.full_coins().await?;
        let full_coins: Vec<FullCoin> = responses.into_iter().map(FullCoin::from).collect();
        let count = full_coins.len();
        self.handle_fetched(full_coins).await?;
        Ok(count)
    }
}
