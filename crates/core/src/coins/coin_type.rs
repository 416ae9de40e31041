//! Typed platform references and their conversion from raw descriptors.

use serde::{Deserialize, Serialize};

use coinkit_market_data::PlatformRaw;

/// Where a coin lives: a native chain, or a token on one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CoinType {
    Bitcoin,
    BitcoinCash,
    Litecoin,
    Dash,
    Zcash,
    Ethereum,
    BinanceSmartChain,
    Solana,
    Erc20 { address: String },
    Bep20 { address: String },
    Mrc20 { address: String },
    Spl { address: String },
    Bep2 { symbol: String },
    /// Catalog rows whose platform type we do not model.
    Unsupported {
        platform_type: String,
        address: Option<String>,
    },
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl CoinType {
    /// Best-effort conversion. Unknown platform types, and token types
    /// missing their address or symbol, yield `None`.
    pub fn from_platform(raw: &PlatformRaw) -> Option<CoinType> {
        let coin_type = match raw.platform_type.as_str() {
            "bitcoin" => CoinType::Bitcoin,
            "bitcoin-cash" => CoinType::BitcoinCash,
            "litecoin" => CoinType::Litecoin,
            "dash" => CoinType::Dash,
            "zcash" => CoinType::Zcash,
            "ethereum" => CoinType::Ethereum,
            "binance-smart-chain" => CoinType::BinanceSmartChain,
            "solana" => CoinType::Solana,
            "erc20" => CoinType::Erc20 {
                address: non_blank(&raw.address)?,
            },
            "bep20" => CoinType::Bep20 {
                address: non_blank(&raw.address)?,
            },
            "mrc20" => CoinType::Mrc20 {
                address: non_blank(&raw.address)?,
            },
            "spl" => CoinType::Spl {
                address: non_blank(&raw.address)?,
            },
            "bep2" => CoinType::Bep2 {
                symbol: non_blank(&raw.symbol)?,
            },
            _ => return None,
        };
        Some(coin_type)
    }

    /// Like [`from_platform`](Self::from_platform) but keeps unknown
    /// descriptors as [`CoinType::Unsupported`]. Used when syncing the catalog.
    pub fn from_platform_lossless(raw: &PlatformRaw) -> CoinType {
        CoinType::from_platform(raw).unwrap_or_else(|| CoinType::Unsupported {
            platform_type: raw.platform_type.clone(),
            address: non_blank(&raw.address),
        })
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, CoinType::Unsupported { .. })
    }

    /// Platform type code, as used in provider descriptors.
    pub fn platform_code(&self) -> &str {
        match self {
            CoinType::Bitcoin => "bitcoin",
            CoinType::BitcoinCash => "bitcoin-cash",
            CoinType::Litecoin => "litecoin",
            CoinType::Dash => "dash",
            CoinType::Zcash => "zcash",
            CoinType::Ethereum => "ethereum",
            CoinType::BinanceSmartChain => "binance-smart-chain",
            CoinType::Solana => "solana",
            CoinType::Erc20 { .. } => "erc20",
            CoinType::Bep20 { .. } => "bep20",
            CoinType::Mrc20 { .. } => "mrc20",
            CoinType::Spl { .. } => "spl",
            CoinType::Bep2 { .. } => "bep2",
            CoinType::Unsupported { platform_type, .. } => platform_type,
        }
    }

    /// Stable string identifier, e.g. `bitcoin`, `erc20|0xabc`, `bep2|BUSD-BD1`.
    pub fn id(&self) -> String {
        match self {
            CoinType::Erc20 { address }
            | CoinType::Bep20 { address }
            | CoinType::Mrc20 { address }
            | CoinType::Spl { address } => {
                format!("{}{}{}", self.platform_code(), ID_SEPARATOR, address)
            }
            CoinType::Bep2 { symbol } => {
                format!("{}{}{}", self.platform_code(), ID_SEPARATOR, symbol)
            }
            CoinType::Unsupported {
                platform_type,
                address: Some(address),
            } => format!(
                "{unsupported}{sep}{}{sep}{}",
                platform_type,
                address,
                unsupported = UNSUPPORTED_KIND,
                sep = ID_SEPARATOR
            ),
            CoinType::Unsupported {
                platform_type,
                address: None,
            } => format!("{}{}{}", UNSUPPORTED_KIND, ID_SEPARATOR, platform_type),
            _ => self.platform_code().to_string(),
        }
    }

    /// Inverse of [`id`](Self::id). Malformed identifiers yield `None`.
    pub fn from_id(id: &str) -> Option<CoinType> {
        let mut parts = id.splitn(3, ID_SEPARATOR);
        let kind = parts.next()?;
        let first = parts.next().map(str::trim).filter(|p| !p.is_empty());
        let rest = parts.next().map(str::trim).filter(|p| !p.is_empty());

        if kind == UNSUPPORTED_KIND {
            return Some(CoinType::Unsupported {
                platform_type: first?.to_string(),
                address: rest.map(str::to_string),
            });
        }
        if rest.is_some() {
            return None;
        }
        let raw = PlatformRaw {
            platform_type: kind.to_string(),
            decimals: None,
            address: first.map(str::to_string),
            symbol: first.map(str::to_string),
        };
        let coin_type = CoinType::from_platform(&raw)?;
        if first.is_some() && coin_type.id() != id {
            return None;
        }
        Some(coin_type)
    }
}

const ID_SEPARATOR: char = '|';
const UNSUPPORTED_KIND: &str = "unsupported";
