//! Tests for coin domain models.

#[cfg(test)]
mod tests {
    use crate::coins::{
        CoinCategory, CoinPrice, CoinType, DefiMarketInfo, FullCoin, MarketInfo,
        MarketInfoOverview,
    };
    use coinkit_market_data::{
        CoinCategoryResponse, CoinPriceResponse, DefiMarketInfoResponse, FullCoinResponse,
        LinkType, MarketInfoRaw, PlatformRaw, TimePeriod,
    };
    use rust_decimal_macros::dec;
    use std::collections::{BTreeMap, HashMap};

    fn bitcoin_response() -> FullCoinResponse {
        FullCoinResponse {
            uid: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            code: "BTC".to_string(),
            market_cap_rank: Some(1),
            coingecko_id: Some("bitcoin".to_string()),
            platforms: vec![PlatformRaw {
                platform_type: "bitcoin".to_string(),
                decimals: Some(8),
                address: None,
                symbol: None,
            }],
        }
    }

    #[test]
    fn test_full_coin_from_response() {
        let full_coin = FullCoin::from(bitcoin_response());

        assert_eq!(full_coin.uid(), "bitcoin");
        assert_eq!(full_coin.coin.coingecko_id.as_deref(), Some("bitcoin"));
        assert_eq!(full_coin.platforms.len(), 1);
        assert_eq!(full_coin.platforms[0].coin_type, CoinType::Bitcoin);
        assert_eq!(full_coin.platforms[0].decimals, 8);
        assert_eq!(full_coin.platforms[0].coin_uid, "bitcoin");
    }

    #[test]
    fn test_category_from_response() {
        let mut description = HashMap::new();
        description.insert("en".to_string(), Some("Exchanges".to_string()));
        description.insert("de".to_string(), None);
        let response = CoinCategoryResponse {
            uid: "dexes".to_string(),
            name: "DEXes".to_string(),
            description,
            order: None,
        };

        let category = CoinCategory::from(response);

        assert_eq!(category.description.len(), 1);
        assert_eq!(category.description["en"], "Exchanges");
        assert_eq!(category.order, i32::MAX);
    }

    #[test]
    fn test_market_info_requires_matching_uid() {
        let full_coin = FullCoin::from(bitcoin_response());
        let raw = |uid: &str| MarketInfoRaw {
            uid: uid.to_string(),
            price: Some(dec!(50000)),
            price_change_24h: None,
            market_cap: None,
            market_cap_rank: Some(1),
            total_volume: None,
        };

        assert!(MarketInfo::try_new(raw("bitcoin"), full_coin.clone()).is_some());
        assert!(MarketInfo::try_new(raw("ethereum"), full_coin).is_none());
    }

    #[test]
    fn test_coin_price_needs_value() {
        let response = CoinPriceResponse {
            uid: "bitcoin".to_string(),
            price: Some(dec!(50000.5)),
            price_change_24h: Some(dec!(-1.2)),
            last_updated: Some(1_700_000_000),
        };
        let price = CoinPrice::from_response(response.clone(), "eur").unwrap();
        assert_eq!(price.currency_code, "EUR");
        assert_eq!(price.diff, Some(dec!(-1.2)));

        let missing = CoinPriceResponse {
            price: None,
            ..response
        };
        assert!(CoinPrice::from_response(missing, "eur").is_none());
    }

    #[test]
    fn test_defi_info_drops_absent_chain_tvls() {
        let mut chain_tvls = HashMap::new();
        chain_tvls.insert("Ethereum".to_string(), Some(dec!(900)));
        chain_tvls.insert("Polygon".to_string(), None);
        let raw = DefiMarketInfoResponse {
            uid: None,
            name: "Lido".to_string(),
            logo: "https://logo".to_string(),
            tvl: Some(dec!(900)),
            tvl_rank: 1,
            tvl_change_1d: None,
            tvl_change_1w: None,
            tvl_change_1m: None,
            chains: vec!["Ethereum".to_string(), "Polygon".to_string()],
            chain_tvls,
        };

        let info = DefiMarketInfo::new(raw, None);

        assert_eq!(info.chain_tvls.len(), 1);
        assert_eq!(info.chain_tvls["Ethereum"], dec!(900));
        assert_eq!(info.chains.len(), 2);
    }

    #[test]
    fn test_overview_serializes_period_codes() {
        let mut usd = BTreeMap::new();
        usd.insert(TimePeriod::Week1, dec!(3.25));
        let mut performance = BTreeMap::new();
        performance.insert("usd".to_string(), usd);
        let mut links = BTreeMap::new();
        links.insert(LinkType::Github, "https://github.com/bitcoin".to_string());

        let overview = MarketInfoOverview {
            market_cap: None,
            market_cap_rank: None,
            total_supply: None,
            circulating_supply: None,
            volume_24h: None,
            diluted_market_cap: None,
            tvl: None,
            performance,
            genesis_date: None,
            categories: Vec::new(),
            description: String::new(),
            platforms: Vec::new(),
            links,
        };

        let json = serde_json::to_value(&overview).unwrap();
        assert_eq!(json["performance"]["usd"]["1w"], serde_json::json!("3.25"));
        assert_eq!(json["links"]["github"], "https://github.com/bitcoin");
    }
}
