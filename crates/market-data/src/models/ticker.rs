use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response from CoinGecko `coins/{id}/tickers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickersResponse {
    #[serde(default)]
    pub tickers: Vec<TickerRaw>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerRaw {
    pub base: String,
    pub target: String,
    pub market: TickerMarketRaw,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub last: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub volume: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerMarketRaw {
    pub identifier: String,
    pub name: String,
}

impl TickersResponse {
    /// Distinct exchange identifiers in first-seen order.
    pub fn exchange_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for ticker in &self.tickers {
            if !ids.contains(&ticker.market.identifier) {
                ids.push(ticker.market.identifier.clone());
            }
        }
        ids
    }
}
