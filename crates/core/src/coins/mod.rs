//! Coins module - catalog models, catalog joins, view assembly and the coin service.

mod catalog_joiner;
mod coin_type;
mod coins_model;
mod coins_service;
mod coins_traits;
mod view_assembler;

#[cfg(test)]
mod coins_model_tests;


// Re-export the public interface
pub use catalog_joiner::{
    compose, compose_optional, CatalogFailurePolicy, CatalogJoiner, JoinOutcome,
};
pub use coin_type::CoinType;
pub use coins_model::{
    Coin, CoinCategory, CoinPrice, DefiMarketInfo, FullCoin, MarketInfo, MarketInfoOverview,
    MarketTicker, Platform, PlatformCoin,
};
pub use coins_service::{CoinService, CoinServiceConfig};
pub use coins_traits::{
    CoinCategoryRepositoryTrait, CoinRepositoryTrait, CoinServiceTrait, ExchangeRepositoryTrait,
};
pub use view_assembler::{
    assemble_overview, assemble_tickers, link_table, performance_table, resolve_categories,
};
