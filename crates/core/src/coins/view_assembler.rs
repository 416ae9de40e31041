//! Assembly of the composite views exposed to callers.
//!
//! Open-ended provider keys are resolved through the closed vocabularies;
//! anything that does not resolve is left out. Views degrade by omission.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use coinkit_market_data::{
    ClosedCode, LinkType, MarketInfoOverviewRaw, TickersResponse, TimePeriod,
};

use super::coin_type::CoinType;
use super::coins_model::{CoinCategory, MarketInfoOverview, MarketTicker};
use super::coins_traits::CoinCategoryRepositoryTrait;

/// Currency -> period -> value. Absent values and unknown period codes are skipped.
pub fn performance_table(
    raw: &HashMap<String, HashMap<String, Option<Decimal>>>,
) -> BTreeMap<String, BTreeMap<TimePeriod, Decimal>> {
    raw.iter()
        .map(|(currency, by_period)| {
            let resolved = by_period
                .iter()
                .filter_map(|(code, value)| {
                    let value = (*value)?;
                    let period = TimePeriod::from_code(code)?;
                    Some((period, value))
                })
                .collect();
            (currency.clone(), resolved)
        })
        .collect()
}

/// Link type -> URL. Unknown link codes and blank URLs are skipped.
pub fn link_table(raw: &HashMap<String, Option<String>>) -> BTreeMap<LinkType, String> {
    raw.iter()
        .filter_map(|(code, url)| {
            let url = url.as_deref().map(str::trim).filter(|u| !u.is_empty())?;
            let link_type = LinkType::from_code(code)?;
            Some((link_type, url.to_string()))
        })
        .collect()
}

/// Resolves category ids in payload order, dropping ids the collaborator did not return.
pub fn resolve_categories(
    category_ids: &[String],
    category_repository: &dyn CoinCategoryRepositoryTrait,
) -> Vec<CoinCategory> {
    if category_ids.is_empty() {
        return Vec::new();
    }

    let categories = match category_repository.coin_categories(category_ids) {
        Ok(categories) => categories,
        Err(e) => {
            warn!("Category lookup failed, overview will have no categories: {}", e);
            return Vec::new();
        }
    };

    let by_uid: HashMap<&str, &CoinCategory> =
        categories.iter().map(|c| (c.uid.as_str(), c)).collect();

    category_ids
        .iter()
        .filter_map(|id| by_uid.get(id.as_str()).map(|c| (*c).clone()))
        .collect()
}

fn parse_genesis_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            debug!("Ignoring unparsable genesis date '{}'", raw);
            None
        }
    }
}

pub fn assemble_overview(
    raw: MarketInfoOverviewRaw,
    category_repository: &dyn CoinCategoryRepositoryTrait,
) -> MarketInfoOverview {
    let categories = resolve_categories(&raw.category_ids, category_repository);
    let performance = performance_table(&raw.performance);
    let links = link_table(&raw.links);
    let platforms: Vec<CoinType> = raw
        .platforms
        .iter()
        .filter_map(CoinType::from_platform)
        .collect();

    let market_data = raw.market_data;

    MarketInfoOverview {
        market_cap: market_data.market_cap,
        market_cap_rank: market_data.market_cap_rank,
        total_supply: market_data.total_supply,
        circulating_supply: market_data.circulating_supply,
        volume_24h: market_data.total_volume,
        diluted_market_cap: market_data.fully_diluted_valuation,
        tvl: market_data.total_value_locked,
        performance,
        genesis_date: parse_genesis_date(raw.genesis_date.as_deref()),
        categories,
        description: raw.description.unwrap_or_default(),
        platforms,
        links,
    }
}

/// Tickers with exchange images attached. Tickers without a rate are dropped.
pub fn assemble_tickers(
    response: TickersResponse,
    image_urls: &HashMap<String, String>,
) -> Vec<MarketTicker> {
    response
        .tickers
        .into_iter()
        .filter_map(|ticker| {
            let rate = ticker.last?;
            Some(MarketTicker {
                market_image_url: image_urls.get(&ticker.market.identifier).cloned(),
                base: ticker.base,
                target: ticker.target,
                market_name: ticker.market.name,
                rate,
                volume: ticker.volume,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{DatabaseError, Result};
    use coinkit_market_data::{OverviewMarketDataRaw, PlatformRaw, TickerMarketRaw, TickerRaw};
    use rust_decimal_macros::dec;

    struct StaticCategories(Vec<CoinCategory>);

    impl CoinCategoryRepositoryTrait for StaticCategories {
        fn coin_categories(&self, uids: &[String]) -> Result<Vec<CoinCategory>> {
            Ok(self
                .0
                .iter()
                .filter(|c| uids.contains(&c.uid))
                .cloned()
                .collect())
        }
    }

    struct BrokenCategories;

    impl CoinCategoryRepositoryTrait for BrokenCategories {
        fn coin_categories(&self, _uids: &[String]) -> Result<Vec<CoinCategory>> {
            Err(DatabaseError::QueryFailed("no such table".to_string()).into())
        }
    }

    fn category(uid: &str, order: i32) -> CoinCategory {
        CoinCategory {
            uid: uid.to_string(),
            name: uid.to_uppercase(),
            description: BTreeMap::new(),
            order,
        }
    }

    fn performance(
        entries: &[(&str, &[(&str, Option<Decimal>)])],
    ) -> HashMap<String, HashMap<String, Option<Decimal>>> {
        entries
            .iter()
            .map(|(currency, values)| {
                (
                    currency.to_string(),
                    values
                        .iter()
                        .map(|(code, value)| (code.to_string(), *value))
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_performance_drops_unknown_periods() {
        let raw = performance(&[(
            "usd",
            &[("1d", Some(dec!(2.5))), ("bogus_period", Some(dec!(9.9)))],
        )]);

        let table = performance_table(&raw);

        let mut expected_usd = BTreeMap::new();
        expected_usd.insert(TimePeriod::Day1, dec!(2.5));
        let mut expected = BTreeMap::new();
        expected.insert("usd".to_string(), expected_usd);
        assert_eq!(table, expected);
    }

    #[test]
    fn test_performance_drops_absent_values() {
        let raw = performance(&[
            ("usd", &[("1w", None), ("1m", Some(dec!(-4)))]),
            ("btc", &[("1y", None)]),
        ]);

        let table = performance_table(&raw);

        assert_eq!(table["usd"].len(), 1);
        assert_eq!(table["usd"][&TimePeriod::Month1], dec!(-4));
        assert!(table["btc"].is_empty());
    }

    #[test]
    fn test_link_table() {
        let raw: HashMap<String, Option<String>> = [
            ("website", Some("https://bitcoin.org")),
            ("discord", Some("https://discord.gg/x")),
            ("twitter", None),
            ("github", Some("   ")),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
        .collect();

        let links = link_table(&raw);

        assert_eq!(links.len(), 1);
        assert_eq!(links[&LinkType::Website], "https://bitcoin.org");
    }

    #[test]
    fn test_categories_follow_payload_order_and_drop_retired() {
        let repository = StaticCategories(vec![category("pow", 2), category("layer-1", 1)]);
        let ids = vec![
            "layer-1".to_string(),
            "retired".to_string(),
            "pow".to_string(),
        ];

        let categories = resolve_categories(&ids, &repository);

        let uids: Vec<&str> = categories.iter().map(|c| c.uid.as_str()).collect();
        assert_eq!(uids, vec!["layer-1", "pow"]);
    }

    #[test]
    fn test_category_failure_degrades() {
        let categories = resolve_categories(&["pow".to_string()], &BrokenCategories);
        assert!(categories.is_empty());
    }

    fn overview_raw() -> MarketInfoOverviewRaw {
        MarketInfoOverviewRaw {
            market_data: OverviewMarketDataRaw {
                market_cap: Some(dec!(980000000000)),
                market_cap_rank: Some(1),
                total_supply: Some(dec!(21000000)),
                circulating_supply: None,
                total_volume: Some(dec!(30000000000)),
                fully_diluted_valuation: None,
                total_value_locked: None,
            },
            performance: performance(&[("usd", &[("1d", Some(dec!(2.5)))])]),
            genesis_date: Some("2009-01-03".to_string()),
            category_ids: vec!["pow".to_string()],
            description: None,
            platforms: vec![
                PlatformRaw {
                    platform_type: "bitcoin".to_string(),
                    decimals: Some(8),
                    address: None,
                    symbol: None,
                },
                PlatformRaw {
                    platform_type: "erc20".to_string(),
                    decimals: Some(8),
                    address: None,
                    symbol: None,
                },
                PlatformRaw {
                    platform_type: "some-new-chain".to_string(),
                    decimals: None,
                    address: Some("0x1".to_string()),
                    symbol: None,
                },
            ],
            links: [("website".to_string(), Some("https://bitcoin.org".to_string()))]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn test_assemble_overview() {
        let repository = StaticCategories(vec![category("pow", 1)]);

        let overview = assemble_overview(overview_raw(), &repository);

        assert_eq!(overview.market_cap_rank, Some(1));
        assert_eq!(overview.volume_24h, Some(dec!(30000000000)));
        assert_eq!(overview.genesis_date, NaiveDate::from_ymd_opt(2009, 1, 3));
        assert_eq!(overview.description, "");
        assert_eq!(overview.platforms, vec![CoinType::Bitcoin]);
        assert_eq!(overview.categories.len(), 1);
        assert_eq!(overview.links.len(), 1);
        assert_eq!(overview.performance["usd"][&TimePeriod::Day1], dec!(2.5));
    }

    #[test]
    fn test_assemble_overview_is_idempotent() {
        let repository = StaticCategories(vec![category("pow", 1)]);
        let first = assemble_overview(overview_raw(), &repository);
        let second = assemble_overview(overview_raw(), &repository);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bad_genesis_date_is_dropped() {
        assert_eq!(parse_genesis_date(Some("03/01/2009")), None);
        assert_eq!(parse_genesis_date(Some("")), None);
        assert_eq!(parse_genesis_date(None), None);
    }

    #[test]
    fn test_assemble_tickers_attaches_images() {
        let ticker = |exchange: &str, last: Option<Decimal>| TickerRaw {
            base: "BTC".to_string(),
            target: "USDT".to_string(),
            market: TickerMarketRaw {
                identifier: exchange.to_string(),
                name: exchange.to_uppercase(),
            },
            last,
            volume: Some(dec!(12)),
        };
        let response = TickersResponse {
            tickers: vec![
                ticker("binance", Some(dec!(50000))),
                ticker("kraken", Some(dec!(50010))),
                ticker("ghost", None),
            ],
        };
        let mut images = HashMap::new();
        images.insert("binance".to_string(), "https://img/binance.png".to_string());

        let tickers = assemble_tickers(response, &images);

        assert_eq!(tickers.len(), 2);
        assert_eq!(
            tickers[0].market_image_url.as_deref(),
            Some("https://img/binance.png")
        );
        assert_eq!(tickers[1].market_image_url, None);
        assert_eq!(tickers[1].rate, dec!(50010));
    }
}
