//! Joins provider market records against the coin catalog.
//!
//! The catalog is looked up once per batch, keyed by coin uid, and records
//! are then matched in a single pass. Records whose uid the catalog does not
//! know are left out: the provider may reference coins the local catalog has
//! not synced yet.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use coinkit_market_data::{DefiMarketInfoResponse, MarketInfoRaw};

use super::coins_model::{DefiMarketInfo, FullCoin, MarketInfo};
use super::coins_traits::CoinRepositoryTrait;
use crate::errors::{Error, Result};

/// What to do when the catalog lookup itself fails during a join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogFailurePolicy {
    /// Log and return an empty result for the batch.
    #[default]
    Degrade,
    /// Return the catalog error to the caller.
    Propagate,
}

/// Result of joining a batch, keeping "no overlap" apart from "catalog down".
#[derive(Debug)]
pub enum JoinOutcome<T> {
    /// The catalog answered. The list may be empty if nothing matched.
    Joined(Vec<T>),
    /// The catalog lookup failed; nothing was joined.
    CatalogFailed(Error),
}

impl<T> JoinOutcome<T> {
    pub fn is_catalog_failure(&self) -> bool {
        matches!(self, JoinOutcome::CatalogFailed(_))
    }

    /// Empty result on catalog failure.
    pub fn into_degraded(self) -> Vec<T> {
        match self {
            JoinOutcome::Joined(items) => items,
            JoinOutcome::CatalogFailed(err) => {
                warn!("Catalog lookup failed, returning empty result: {}", err);
                Vec::new()
            }
        }
    }

    pub fn into_result(self) -> Result<Vec<T>> {
        match self {
            JoinOutcome::Joined(items) => Ok(items),
            JoinOutcome::CatalogFailed(err) => Err(err),
        }
    }

    pub fn resolve(self, policy: CatalogFailurePolicy) -> Result<Vec<T>> {
        match policy {
            CatalogFailurePolicy::Degrade => Ok(self.into_degraded()),
            CatalogFailurePolicy::Propagate => self.into_result(),
        }
    }
}

/// Inner join in input order. Unmatched records are dropped.
pub fn compose(
    raw_records: Vec<MarketInfoRaw>,
    catalog: &HashMap<String, FullCoin>,
) -> Vec<MarketInfo> {
    let total = raw_records.len();
    let infos: Vec<MarketInfo> = raw_records
        .into_iter()
        .filter_map(|raw| {
            let full_coin = catalog.get(&raw.uid)?.clone();
            MarketInfo::try_new(raw, full_coin)
        })
        .collect();

    if infos.len() < total {
        debug!(
            "Joined {} of {} market records; {} not in catalog",
            infos.len(),
            total,
            total - infos.len()
        );
    }
    infos
}

/// Left join: every row is kept, with the catalog half when there is one.
pub fn compose_optional(
    raw_records: Vec<DefiMarketInfoResponse>,
    catalog: &HashMap<String, FullCoin>,
) -> Vec<DefiMarketInfo> {
    raw_records
        .into_iter()
        .map(|raw| {
            let full_coin = raw.uid.as_ref().and_then(|uid| catalog.get(uid)).cloned();
            DefiMarketInfo::new(raw, full_coin)
        })
        .collect()
}

/// Batch catalog lookup in front of [`compose`].
#[derive(Clone)]
pub struct CatalogJoiner {
    coin_repository: Arc<dyn CoinRepositoryTrait>,
}

impl CatalogJoiner {
    pub fn new(coin_repository: Arc<dyn CoinRepositoryTrait>) -> Self {
        Self { coin_repository }
    }

    /// One catalog call for the distinct identifiers of the batch.
    pub fn lookup<'a, I>(&self, coin_uids: I) -> Result<HashMap<String, FullCoin>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let distinct: Vec<String> = coin_uids
            .into_iter()
            .filter(|uid| seen.insert(*uid))
            .map(str::to_string)
            .collect();

        if distinct.is_empty() {
            return Ok(HashMap::new());
        }

        let full_coins = self.coin_repository.full_coins(&distinct)?;
        Ok(full_coins
            .into_iter()
            .map(|full_coin| (full_coin.coin.uid.clone(), full_coin))
            .collect())
    }

    pub fn join(&self, raw_records: Vec<MarketInfoRaw>) -> JoinOutcome<MarketInfo> {
        match self.lookup(raw_records.iter().map(|raw| raw.uid.as_str())) {
            Ok(catalog) => JoinOutcome::Joined(compose(raw_records, &catalog)),
            Err(err) => JoinOutcome::CatalogFailed(err),
        }
    }

    pub fn join_defi(
        &self,
        raw_records: Vec<DefiMarketInfoResponse>,
    ) -> JoinOutcome<DefiMarketInfo> {
        match self.lookup(raw_records.iter().filter_map(|raw| raw.uid.as_deref())) {
            Ok(catalog) => JoinOutcome::Joined(compose_optional(raw_records, &catalog)),
            Err(err) => JoinOutcome::CatalogFailed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coins::coin_type::CoinType;
    use crate::coins::coins_model::{Coin, PlatformCoin};
    use crate::errors::DatabaseError;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    fn full_coin(uid: &str, name: &str) -> FullCoin {
        FullCoin {
            coin: Coin {
                uid: uid.to_string(),
                name: name.to_string(),
                code: name.to_uppercase(),
                market_cap_rank: None,
                coingecko_id: None,
            },
            platforms: Vec::new(),
        }
    }

    fn raw(uid: &str, price: rust_decimal::Decimal) -> MarketInfoRaw {
        MarketInfoRaw {
            uid: uid.to_string(),
            price: Some(price),
            price_change_24h: None,
            market_cap: None,
            market_cap_rank: None,
            total_volume: None,
        }
    }

    struct RecordingRepository {
        coins: Vec<FullCoin>,
        fail: bool,
        calls: Mutex<Vec<Vec<String>>>,
    }

    impl RecordingRepository {
        fn new(coins: Vec<FullCoin>) -> Self {
            Self {
                coins,
                fail: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                coins: Vec::new(),
                fail: true,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl CoinRepositoryTrait for RecordingRepository {
        fn full_coins(&self, coin_uids: &[String]) -> Result<Vec<FullCoin>> {
            self.calls.lock().unwrap().push(coin_uids.to_vec());
            if self.fail {
                return Err(DatabaseError::ConnectionFailed("offline".to_string()).into());
            }
            Ok(self
                .coins
                .iter()
                .filter(|c| coin_uids.contains(&c.coin.uid))
                .cloned()
                .collect())
        }

        fn search_full_coins(&self, _filter: &str, _limit: usize) -> Result<Vec<FullCoin>> {
            unimplemented!()
        }

        fn search_coins(&self, _filter: &str, _limit: usize) -> Result<Vec<Coin>> {
            unimplemented!()
        }

        fn coin(&self, _coin_uid: &str) -> Result<Option<Coin>> {
            unimplemented!()
        }

        fn platform_coins(&self, _coin_types: &[CoinType]) -> Result<Vec<PlatformCoin>> {
            unimplemented!()
        }

        fn search_platform_coins(
            &self,
            _platform_type: &str,
            _filter: &str,
            _limit: usize,
        ) -> Result<Vec<PlatformCoin>> {
            unimplemented!()
        }

        async fn save_full_coins(&self, _full_coins: Vec<FullCoin>) -> Result<usize> {
            unimplemented!()
        }
    }

    #[test]
    fn test_compose_keeps_only_matched_records() {
        let mut catalog = HashMap::new();
        catalog.insert("bitcoin".to_string(), full_coin("bitcoin", "Bitcoin"));

        let infos = compose(
            vec![raw("bitcoin", dec!(50000)), raw("unknown-coin", dec!(1))],
            &catalog,
        );

        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].full_coin, catalog["bitcoin"]);
        assert_eq!(infos[0].price, Some(dec!(50000)));
    }

    #[test]
    fn test_compose_preserves_input_order() {
        let catalog: HashMap<String, FullCoin> = ["a", "b", "c"]
            .iter()
            .map(|uid| (uid.to_string(), full_coin(uid, uid)))
            .collect();

        let infos = compose(
            vec![raw("c", dec!(3)), raw("a", dec!(1)), raw("b", dec!(2))],
            &catalog,
        );

        let uids: Vec<&str> = infos.iter().map(|i| i.full_coin.uid()).collect();
        assert_eq!(uids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_lookup_is_one_call_with_distinct_ids() {
        let repository = Arc::new(RecordingRepository::new(vec![full_coin("bitcoin", "Bitcoin")]));
        let joiner = CatalogJoiner::new(repository.clone());

        let outcome = joiner.join(vec![
            raw("bitcoin", dec!(1)),
            raw("bitcoin", dec!(2)),
            raw("ethereum", dec!(3)),
        ]);

        let infos = outcome.into_result().unwrap();
        assert_eq!(infos.len(), 2);
        let calls = repository.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec!["bitcoin".to_string(), "ethereum".to_string()]);
    }

    #[test]
    fn test_empty_batch_skips_catalog() {
        let repository = Arc::new(RecordingRepository::failing());
        let joiner = CatalogJoiner::new(repository.clone());

        let outcome = joiner.join(Vec::new());

        assert!(!outcome.is_catalog_failure());
        assert!(repository.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_catalog_failure_is_distinguishable() {
        let joiner = CatalogJoiner::new(Arc::new(RecordingRepository::failing()));

        let outcome = joiner.join(vec![raw("bitcoin", dec!(1))]);
        assert!(outcome.is_catalog_failure());
        assert!(outcome.into_degraded().is_empty());

        let outcome = joiner.join(vec![raw("bitcoin", dec!(1))]);
        assert!(matches!(
            outcome.resolve(CatalogFailurePolicy::Propagate),
            Err(Error::Database(DatabaseError::ConnectionFailed(_)))
        ));
    }

    #[test]
    fn test_no_overlap_is_not_a_failure() {
        let joiner = CatalogJoiner::new(Arc::new(RecordingRepository::new(vec![full_coin(
            "bitcoin", "Bitcoin",
        )])));

        let outcome = joiner.join(vec![raw("dogecoin", dec!(1))]);

        assert!(!outcome.is_catalog_failure());
        assert!(outcome
            .resolve(CatalogFailurePolicy::Propagate)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_defi_left_join_keeps_unmatched_rows() {
        let mut catalog = HashMap::new();
        catalog.insert("uniswap".to_string(), full_coin("uniswap", "Uniswap"));

        let row = |uid: Option<&str>, name: &str| DefiMarketInfoResponse {
            uid: uid.map(str::to_string),
            name: name.to_string(),
            logo: String::new(),
            tvl: Some(dec!(100)),
            tvl_rank: 1,
            tvl_change_1d: None,
            tvl_change_1w: None,
            tvl_change_1m: None,
            chains: Vec::new(),
            chain_tvls: Default::default(),
        };

        let infos = compose_optional(
            vec![
                row(Some("uniswap"), "Uniswap"),
                row(None, "Lido"),
                row(Some("not-synced"), "Other"),
            ],
            &catalog,
        );

        assert_eq!(infos.len(), 3);
        assert_eq!(infos[0].full_coin.as_ref().map(|c| c.uid()), Some("uniswap"));
        assert!(infos[1].full_coin.is_none());
        assert!(infos[2].full_coin.is_none());
    }
}
