use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Analytics overview from `analytics/{uid}`.
///
/// Each section is optional: the provider omits sections it has no data for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRaw {
    #[serde(default)]
    pub cex_volume: Option<RankedVolumeRaw>,
    #[serde(default)]
    pub dex_volume: Option<RankedVolumeRaw>,
    #[serde(default)]
    pub dex_liquidity: Option<LiquidityRaw>,
    #[serde(default)]
    pub addresses: Option<AddressesRaw>,
    #[serde(default)]
    pub transactions: Option<TransactionsRaw>,
    #[serde(default)]
    pub revenue: Option<RevenueRaw>,
    #[serde(default)]
    pub tvl: Option<TvlRaw>,
    #[serde(default)]
    pub reports: Option<i32>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub funds_invested: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub treasuries: Option<Decimal>,
    #[serde(default)]
    pub holders: Option<Vec<HolderBlockchainRaw>>,
    #[serde(default)]
    pub holders_rank: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedVolumeRaw {
    #[serde(default)]
    pub rank_30d: Option<i32>,
    #[serde(default)]
    pub points: Vec<VolumePointRaw>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityRaw {
    #[serde(default)]
    pub rank: Option<i32>,
    #[serde(default)]
    pub points: Vec<VolumePointRaw>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressesRaw {
    #[serde(default)]
    pub rank_30d: Option<i32>,
    #[serde(default, deserialize_with = "super::lenient::count")]
    pub count_30d: Option<i64>,
    #[serde(default)]
    pub points: Vec<CountPointRaw>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsRaw {
    #[serde(default)]
    pub rank_30d: Option<i32>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub volume_30d: Option<Decimal>,
    #[serde(default)]
    pub points: Vec<CountPointRaw>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRaw {
    #[serde(default)]
    pub rank_30d: Option<i32>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub value_30d: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvlRaw {
    #[serde(default)]
    pub rank: Option<i32>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub ratio: Option<Decimal>,
    #[serde(default)]
    pub points: Vec<TvlValuePointRaw>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumePointRaw {
    pub timestamp: i64,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub volume: Option<Decimal>,
}

/// Count points. The count arrives as a string or as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountPointRaw {
    pub timestamp: i64,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub count: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvlValuePointRaw {
    pub timestamp: i64,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub tvl: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolderBlockchainRaw {
    pub blockchain_uid: String,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub holders_count: Option<Decimal>,
}

/// Ranking row carrying one value per window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankMultiValueRaw {
    pub uid: String,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub value_1d: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub value_7d: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub value_30d: Option<Decimal>,
}

/// Ranking row carrying a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankValueRaw {
    pub uid: String,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub value: Option<Decimal>,
}
