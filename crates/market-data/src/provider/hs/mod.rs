//! HS market API provider.
//!
//! Serves the coin list, market snapshots, coin overviews and analytics from
//! the current API, and global market points from the legacy API. Field
//! selections are fixed per endpoint.

mod config;

pub use config::HsProviderConfig;

use async_trait::async_trait;
use reqwest::Client;

use crate::errors::MarketDataError;
use crate::models::{
    ActiveAddressesResponse, AnalyticsRaw, ClosedCode, CoinCategoryResponse, CoinPriceResponse,
    DefiMarketInfoResponse, DexLiquiditiesResponse, DexVolumesResponse, FullCoinResponse,
    GlobalMarketPointRaw, MarketInfoOverviewRaw, MarketInfoQuery, MarketInfoRaw, TimePeriod,
    TransactionsResponse, TvlPointRaw,
};
use crate::provider::http::{get_json, segment};
use crate::provider::CoinDataProvider;

const PROVIDER_ID: &str = "HS";

const MARKET_INFO_FIELDS: &str =
    "name,code,price,price_change_24h,market_cap_rank,coingecko_id,market_cap,total_volume";
const FULL_COIN_FIELDS: &str = "name,code,market_cap_rank,coingecko_id,platforms";
const COIN_PRICE_FIELDS: &str = "price,price_change_24h,last_updated";
const CATEGORIES_PATH: &str = "categories";

pub struct HsProvider {
    client: Client,
    config: HsProviderConfig,
}

impl HsProvider {
    pub fn new(config: HsProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    pub fn config(&self) -> &HsProviderConfig {
        &self.config
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, MarketDataError> {
        get_json(&self.client, PROVIDER_ID, &self.config.api_url(path), params).await
    }
}

impl Default for HsProvider {
    fn default() -> Self {
        Self::new(HsProviderConfig::default())
    }
}

/// Query parameters for a market snapshot request, keyed by query shape.
fn market_info_request(query: &MarketInfoQuery) -> (String, Vec<(&'static str, String)>) {
    let mut params = vec![
        ("fields", MARKET_INFO_FIELDS.to_string()),
        ("currency", query.currency().to_lowercase()),
    ];

    let path = match query {
        MarketInfoQuery::Top { limit, defi, .. } => {
            params.push(("limit", limit.to_string()));
            if *defi {
                params.push(("defi", "true".to_string()));
            }
            "coins".to_string()
        }
        MarketInfoQuery::Coins { uids, .. } => {
            params.push(("uids", uids.join(",")));
            "coins".to_string()
        }
        MarketInfoQuery::Category { uid, .. } => {
            format!("{}/{}/coins", CATEGORIES_PATH, segment(uid))
        }
    };

    (path, params)
}

#[async_trait]
impl CoinDataProvider for HsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn full_coins(&self) -> Result<Vec<FullCoinResponse>, MarketDataError> {
        self.get("coins", &[("fields", FULL_COIN_FIELDS.to_string())])
            .await
    }

    async fn coin_categories(&self) -> Result<Vec<CoinCategoryResponse>, MarketDataError> {
        self.get(CATEGORIES_PATH, &[]).await
    }

    async fn market_infos(
        &self,
        query: &MarketInfoQuery,
    ) -> Result<Vec<MarketInfoRaw>, MarketDataError> {
        let (path, params) = market_info_request(query);
        self.get(&path, &params).await
    }

    async fn defi_market_infos(
        &self,
        currency: &str,
    ) -> Result<Vec<DefiMarketInfoResponse>, MarketDataError> {
        self.get("defi-protocols", &[("currency", currency.to_lowercase())])
            .await
    }

    async fn coin_prices(
        &self,
        coin_uids: &[String],
        currency: &str,
    ) -> Result<Vec<CoinPriceResponse>, MarketDataError> {
        self.get(
            "coins",
            &[
                ("fields", COIN_PRICE_FIELDS.to_string()),
                ("uids", coin_uids.join(",")),
                ("currency", currency.to_lowercase()),
            ],
        )
        .await
    }

    async fn market_info_overview(
        &self,
        coin_uid: &str,
        currency: &str,
        language: &str,
    ) -> Result<MarketInfoOverviewRaw, MarketDataError> {
        self.get(
            &format!("coins/{}", segment(coin_uid)),
            &[
                ("currency", currency.to_lowercase()),
                ("language", language.to_string()),
            ],
        )
        .await
    }

    async fn global_market_points(
        &self,
        currency: &str,
        period: TimePeriod,
    ) -> Result<Vec<GlobalMarketPointRaw>, MarketDataError> {
        let url = self
            .config
            .legacy_api_url(&format!("markets/global/{}", period.code()));
        get_json(
            &self.client,
            PROVIDER_ID,
            &url,
            &[("currency_code", currency.to_lowercase())],
        )
        .await
    }

    async fn market_info_tvl(
        &self,
        coin_uid: &str,
        currency: &str,
        period: TimePeriod,
    ) -> Result<Vec<TvlPointRaw>, MarketDataError> {
        self.get(
            &format!("defi-protocols/{}/tvls", segment(coin_uid)),
            &[
                ("currency", currency.to_lowercase()),
                ("interval", period.code().to_string()),
            ],
        )
        .await
    }

    async fn analytics(
        &self,
        coin_uid: &str,
        currency: &str,
    ) -> Result<AnalyticsRaw, MarketDataError> {
        self.get(
            &format!("analytics/{}", segment(coin_uid)),
            &[("currency", currency.to_lowercase())],
        )
        .await
    }

    async fn dex_volumes(
        &self,
        coin_uid: &str,
        currency: &str,
        period: TimePeriod,
    ) -> Result<DexVolumesResponse, MarketDataError> {
        self.get(
            &format!("analytics/{}/dex-volumes", segment(coin_uid)),
            &[
                ("currency", currency.to_lowercase()),
                ("interval", period.code().to_string()),
            ],
        )
        .await
    }

    async fn dex_liquidities(
        &self,
        coin_uid: &str,
        currency: &str,
        period: TimePeriod,
    ) -> Result<DexLiquiditiesResponse, MarketDataError> {
        self.get(
            &format!("analytics/{}/dex-liquidity", segment(coin_uid)),
            &[
                ("currency", currency.to_lowercase()),
                ("interval", period.code().to_string()),
            ],
        )
        .await
    }

    async fn transactions(
        &self,
        coin_uid: &str,
        period: TimePeriod,
    ) -> Result<TransactionsResponse, MarketDataError> {
        self.get(
            &format!("analytics/{}/transactions", segment(coin_uid)),
            &[("interval", period.code().to_string())],
        )
        .await
    }

    async fn active_addresses(
        &self,
        coin_uid: &str,
        period: TimePeriod,
    ) -> Result<ActiveAddressesResponse, MarketDataError> {
        self.get(
            &format!("analytics/{}/addresses", segment(coin_uid)),
            &[("interval", period.code().to_string())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_top_request() {
        let (path, params) = market_info_request(&MarketInfoQuery::Top {
            limit: 250,
            currency: "USD".to_string(),
            defi: false,
        });
        assert_eq!(path, "coins");
        assert_eq!(param(&params, "limit"), Some("250"));
        assert_eq!(param(&params, "currency"), Some("usd"));
        assert_eq!(param(&params, "fields"), Some(MARKET_INFO_FIELDS));
        assert_eq!(param(&params, "defi"), None);
    }

    #[test]
    fn test_coins_request_joins_uids() {
        let (path, params) = market_info_request(&MarketInfoQuery::Coins {
            uids: vec!["bitcoin".to_string(), "ethereum".to_string()],
            currency: "eur".to_string(),
        });
        assert_eq!(path, "coins");
        assert_eq!(param(&params, "uids"), Some("bitcoin,ethereum"));
    }

    #[test]
    fn test_category_request_uses_path() {
        let (path, params) = market_info_request(&MarketInfoQuery::Category {
            uid: "defi".to_string(),
            currency: "usd".to_string(),
        });
        assert_eq!(path, format!("{}/defi/coins", CATEGORIES_PATH));
        assert_eq!(param(&params, "uids"), None);
    }

    #[test]
    fn test_provider_id() {
        let provider = HsProvider::default();
        assert_eq!(provider.id(), "HS");
        assert_eq!(provider.config(), &HsProviderConfig::default());
    }
}
