use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Neutral chart record every provider series is normalized into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub value: Decimal,
    /// Unix seconds.
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_value: Option<Decimal>,
}

impl ChartPoint {
    pub fn new(value: Decimal, timestamp: i64) -> Self {
        Self {
            value,
            timestamp,
            secondary_value: None,
        }
    }

    pub fn with_secondary(value: Decimal, timestamp: i64, secondary: Option<Decimal>) -> Self {
        Self {
            value,
            timestamp,
            secondary_value: secondary,
        }
    }
}

/// One point of a pro chart series. Depending on the endpoint either the
/// count, the volume, or both are populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProChartPointRaw {
    pub timestamp: i64,
    #[serde(default, deserialize_with = "super::lenient::count")]
    pub count: Option<i64>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub volume: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DexLiquiditiesResponse {
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub liquidity: Vec<ProChartPointRaw>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DexVolumesResponse {
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub volumes: Vec<ProChartPointRaw>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub transactions: Vec<ProChartPointRaw>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveAddressesResponse {
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub addresses: Vec<ProChartPointRaw>,
}

/// Flat TVL series point from `coins/{uid}/tvl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvlPointRaw {
    pub timestamp: i64,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub tvl: Option<Decimal>,
}

/// Global market point from the legacy `markets/global/{period}` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalMarketPointRaw {
    pub timestamp: i64,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub market_cap: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub volume24h: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub dominance_btc: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub market_cap_defi: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient::decimal")]
    pub tvl: Option<Decimal>,
}

/// Normalized global market point. `market_cap` is the primary series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalMarketPoint {
    pub timestamp: i64,
    pub market_cap: Decimal,
    pub volume_24h: Option<Decimal>,
    pub dominance_btc: Option<Decimal>,
    pub defi_market_cap: Option<Decimal>,
    pub tvl: Option<Decimal>,
}
