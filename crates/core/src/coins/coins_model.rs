//! Domain models for the coin catalog and the composite market views.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use coinkit_market_data::{
    CoinCategoryResponse, CoinPriceResponse, DefiMarketInfoResponse, FullCoinResponse, LinkType,
    MarketInfoRaw, TimePeriod,
};

use super::coin_type::CoinType;

/// Catalog coin record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub uid: String,
    pub name: String,
    pub code: String,
    pub market_cap_rank: Option<i32>,
    /// Id of the coin at the secondary (ticker) provider.
    pub coingecko_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub coin_type: CoinType,
    pub decimals: i32,
    pub coin_uid: String,
}

/// A catalog entry: the coin plus every platform it is issued on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullCoin {
    pub coin: Coin,
    pub platforms: Vec<Platform>,
}

impl FullCoin {
    pub fn uid(&self) -> &str {
        &self.coin.uid
    }
}

/// A single platform of a coin, paired with the coin itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformCoin {
    pub platform: Platform,
    pub coin: Coin,
}

impl PlatformCoin {
    pub fn coin_type(&self) -> &CoinType {
        &self.platform.coin_type
    }
}

impl From<FullCoinResponse> for FullCoin {
    fn from(response: FullCoinResponse) -> Self {
        let platforms = response
            .platforms
            .iter()
            .map(|raw| Platform {
                coin_type: CoinType::from_platform_lossless(raw),
                decimals: raw.decimals.unwrap_or_default(),
                coin_uid: response.uid.clone(),
            })
            .collect();

        FullCoin {
            coin: Coin {
                uid: response.uid,
                name: response.name,
                code: response.code,
                market_cap_rank: response.market_cap_rank,
                coingecko_id: response.coingecko_id.filter(|id| !id.is_empty()),
            },
            platforms,
        }
    }
}

/// Composite of a catalog entry and its market snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInfo {
    pub full_coin: FullCoin,
    pub price: Option<Decimal>,
    pub price_change_24h: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    pub market_cap_rank: Option<i32>,
    pub total_volume: Option<Decimal>,
}

impl MarketInfo {
    /// Builds the composite, or `None` when the halves describe different coins.
    pub fn try_new(raw: MarketInfoRaw, full_coin: FullCoin) -> Option<Self> {
        if raw.uid != full_coin.coin.uid {
            return None;
        }
        Some(Self {
            full_coin,
            price: raw.price,
            price_change_24h: raw.price_change_24h,
            market_cap: raw.market_cap,
            market_cap_rank: raw.market_cap_rank,
            total_volume: raw.total_volume,
        })
    }
}

/// DeFi protocol row, left-joined with the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefiMarketInfo {
    pub full_coin: Option<FullCoin>,
    pub name: String,
    pub logo_url: String,
    pub tvl: Option<Decimal>,
    pub tvl_rank: i32,
    pub tvl_change_1d: Option<Decimal>,
    pub tvl_change_1w: Option<Decimal>,
    pub tvl_change_1m: Option<Decimal>,
    pub chains: Vec<String>,
    pub chain_tvls: BTreeMap<String, Decimal>,
}

impl DefiMarketInfo {
    pub fn new(raw: DefiMarketInfoResponse, full_coin: Option<FullCoin>) -> Self {
        Self {
            full_coin,
            name: raw.name,
            logo_url: raw.logo,
            tvl: raw.tvl,
            tvl_rank: raw.tvl_rank,
            tvl_change_1d: raw.tvl_change_1d,
            tvl_change_1w: raw.tvl_change_1w,
            tvl_change_1m: raw.tvl_change_1m,
            chains: raw.chains,
            chain_tvls: raw
                .chain_tvls
                .into_iter()
                .filter_map(|(chain, tvl)| tvl.map(|tvl| (chain, tvl)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPrice {
    pub coin_uid: String,
    pub currency_code: String,
    pub value: Decimal,
    pub diff: Option<Decimal>,
    pub timestamp: Option<i64>,
}

impl CoinPrice {
    /// `None` when the provider sent no price.
    pub fn from_response(response: CoinPriceResponse, currency_code: &str) -> Option<Self> {
        let value = response.price?;
        Some(Self {
            coin_uid: response.uid,
            currency_code: currency_code.to_uppercase(),
            value,
            diff: response.price_change_24h,
            timestamp: response.last_updated,
        })
    }
}

/// Category display record from the category collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinCategory {
    pub uid: String,
    pub name: String,
    /// Description per language code.
    pub description: BTreeMap<String, String>,
    pub order: i32,
}

impl From<CoinCategoryResponse> for CoinCategory {
    fn from(response: CoinCategoryResponse) -> Self {
        CoinCategory {
            uid: response.uid,
            name: response.name,
            description: response
                .description
                .into_iter()
                .filter_map(|(language, text)| text.map(|text| (language, text)))
                .collect(),
            order: response.order.unwrap_or(i32::MAX),
        }
    }
}

/// Detailed coin overview.
///
/// `performance` and `links` are sparse: codes outside the closed
/// vocabularies and absent values never appear as keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInfoOverview {
    pub market_cap: Option<Decimal>,
    pub market_cap_rank: Option<i32>,
    pub total_supply: Option<Decimal>,
    pub circulating_supply: Option<Decimal>,
    pub volume_24h: Option<Decimal>,
    pub diluted_market_cap: Option<Decimal>,
    pub tvl: Option<Decimal>,
    pub performance: BTreeMap<String, BTreeMap<TimePeriod, Decimal>>,
    pub genesis_date: Option<NaiveDate>,
    pub categories: Vec<CoinCategory>,
    pub description: String,
    pub platforms: Vec<CoinType>,
    pub links: BTreeMap<LinkType, String>,
}

/// Exchange ticker for a coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTicker {
    pub base: String,
    pub target: String,
    pub market_name: String,
    pub market_image_url: Option<String>,
    pub rate: Decimal,
    pub volume: Option<Decimal>,
}
