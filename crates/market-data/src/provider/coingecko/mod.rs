//! CoinGecko ticker provider.
//!
//! Only the exchange tickers endpoint is used. Coins are addressed by their
//! CoinGecko id, which the catalog stores as the coin's external id.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::errors::MarketDataError;
use crate::models::TickersResponse;
use crate::provider::http::{get_json, segment};
use crate::provider::TickerProvider;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";
const PROVIDER_ID: &str = "COINGECKO";

pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn tickers_url(&self, external_id: &str) -> String {
        format!("{}/coins/{}/tickers", self.base_url, segment(external_id))
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TickerProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn market_tickers(&self, external_id: &str) -> Result<TickersResponse, MarketDataError> {
        get_json(
            &self.client,
            PROVIDER_ID,
            &self.tickers_url(external_id),
            &[("include_exchange_logo", "false".to_string())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickers_url() {
        let provider = CoinGeckoProvider::with_base_url("http://localhost:9000/api/v3/");
        assert_eq!(
            provider.tickers_url("bitcoin"),
            "http://localhost:9000/api/v3/coins/bitcoin/tickers"
        );
    }
}
