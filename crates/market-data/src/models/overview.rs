use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::coin::PlatformRaw;

/// Coin detail payload from `coins/{uid}`.
///
/// `performance` is keyed by currency, then by period code. `links` is keyed
/// by link-type code. Both key sets are provider-defined and open-ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInfoOverviewRaw {
    #[serde(default)]
    pub market_data: OverviewMarketDataRaw,
    #[serde(default, deserialize_with = "super::lenient::decimal_table")]
    pub performance: HashMap<String, HashMap<String, Option<Decimal>>>,
    #[serde(default)]
    pub genesis_date: Option<String>,
    #[serde(default, rename = "categories")]
    pub category_ids: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub platforms: Vec<PlatformRaw>,
    #[serde(default)]
    pub links: HashMap<String, Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewMarketDataRaw {
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub market_cap: Option<Decimal>,
    #[serde(default)]
    pub market_cap_rank: Option<i32>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub total_supply: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub circulating_supply: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub total_volume: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub fully_diluted_valuation: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub total_value_locked: Option<Decimal>,
}
