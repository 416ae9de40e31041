use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Coin list entry as returned by the `coins` endpoint with platform fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullCoinResponse {
    pub uid: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub market_cap_rank: Option<i32>,
    #[serde(default)]
    pub coingecko_id: Option<String>,
    #[serde(default)]
    pub platforms: Vec<PlatformRaw>,
}

/// Untyped platform descriptor.
///
/// `type` is an open vocabulary ("erc20", "bep2", "ethereum", ...). Which
/// of `address`/`symbol` is meaningful depends on the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRaw {
    #[serde(rename = "type")]
    pub platform_type: String,
    #[serde(default)]
    pub decimals: Option<i32>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Category entry from the `categories` endpoint.
///
/// `description` is keyed by language code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinCategoryResponse {
    pub uid: String,
    pub name: String,
    #[serde(default)]
    pub description: HashMap<String, Option<String>>,
    #[serde(default)]
    pub order: Option<i32>,
}
