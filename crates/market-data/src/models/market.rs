use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market snapshot for a single coin, straight from the provider.
///
/// Every figure may be missing on the wire; nothing here is defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInfoRaw {
    pub uid: String,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub price_change_24h: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub market_cap: Option<Decimal>,
    #[serde(default)]
    pub market_cap_rank: Option<i32>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub total_volume: Option<Decimal>,
}

/// Which market snapshot batch to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketInfoQuery {
    /// Top `limit` coins by market cap. `defi` restricts to DeFi coins.
    Top {
        limit: u32,
        currency: String,
        defi: bool,
    },
    /// An explicit identifier set.
    Coins { uids: Vec<String>, currency: String },
    /// Every coin in a category.
    Category { uid: String, currency: String },
}

impl MarketInfoQuery {
    pub fn currency(&self) -> &str {
        match self {
            Self::Top { currency, .. }
            | Self::Coins { currency, .. }
            | Self::Category { currency, .. } => currency,
        }
    }
}

/// Price row from the `coins` endpoint with price fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinPriceResponse {
    pub uid: String,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub price_change_24h: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::count")]
    pub last_updated: Option<i64>,
}

/// DeFi protocol row. `uid` is only present when the protocol is also a coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefiMarketInfoResponse {
    #[serde(default)]
    pub uid: Option<String>,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub tvl: Option<Decimal>,
    pub tvl_rank: i32,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub tvl_change_1d: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub tvl_change_1w: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub tvl_change_1m: Option<Decimal>,
    #[serde(default)]
    pub chains: Vec<String>,
    #[serde(default, deserialize_with = "super::lenient::decimal_map")]
    pub chain_tvls: HashMap<String, Option<Decimal>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_market_info_with_string_and_number_decimals() {
        let json = r#"{
            "uid": "bitcoin",
            "price": "50000.123456789012345678",
            "price_change_24h": -1.25,
            "market_cap": "980000000000",
            "market_cap_rank": 1,
            "total_volume": null
        }"#;
        let raw: MarketInfoRaw = serde_json::from_str(json).unwrap();
        assert_eq!(raw.price, Some(dec!(50000.123456789012345678)));
        assert_eq!(raw.price_change_24h, Some(dec!(-1.25)));
        assert_eq!(raw.market_cap_rank, Some(1));
        assert_eq!(raw.total_volume, None);
    }

    #[test]
    fn test_number_decimals_keep_full_precision() {
        let json = r#"{"uid": "shiba", "price": 0.000008123456789012345}"#;
        let raw: MarketInfoRaw = serde_json::from_str(json).unwrap();
        assert_eq!(raw.price, Some(dec!(0.000008123456789012345)));
    }

    #[test]
    fn test_over_precise_price_is_dropped_not_rounded() {
        let json = r#"{
            "uid": "dust",
            "price": 0.0000000000123456789012345678901234567,
            "market_cap": 1e32,
            "total_volume": "15.5"
        }"#;
        let raw: MarketInfoRaw = serde_json::from_str(json).unwrap();
        assert_eq!(raw.uid, "dust");
        assert_eq!(raw.price, None);
        assert_eq!(raw.market_cap, None);
        assert_eq!(raw.total_volume, Some(dec!(15.5)));
    }

    #[test]
    fn test_query_currency() {
        let query = MarketInfoQuery::Category {
            uid: "defi".to_string(),
            currency: "usd".to_string(),
        };
        assert_eq!(query.currency(), "usd");
    }

    #[test]
    fn test_deserialize_defi_market_info_without_uid() {
        let json = r#"{
            "name": "Curve",
            "logo": "https://example.com/curve.png",
            "tvl": "1200000000",
            "tvl_rank": 4,
            "tvl_change_1d": "0.5",
            "chains": ["Ethereum", "Polygon"],
            "chain_tvls": {"Ethereum": "1000000000", "Polygon": null}
        }"#;
        let raw: DefiMarketInfoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(raw.uid, None);
        assert_eq!(raw.tvl, Some(dec!(1200000000)));
        assert_eq!(raw.tvl_rank, 4);
        assert_eq!(raw.tvl_change_1w, None);
        assert_eq!(raw.chain_tvls.get("Polygon"), Some(&None));
    }

    #[test]
    fn test_defi_row_survives_unrepresentable_tvl() {
        let json = r#"{
            "uid": "curve-dao-token",
            "name": "Curve",
            "tvl": 1e35,
            "tvl_rank": 4,
            "chain_tvls": {"Ethereum": 1e35, "Polygon": 12.5}
        }"#;
        let raw: DefiMarketInfoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(raw.tvl, None);
        assert_eq!(raw.chain_tvls.get("Ethereum"), Some(&None));
        assert_eq!(raw.chain_tvls.get("Polygon"), Some(&Some(dec!(12.5))));
    }
}
