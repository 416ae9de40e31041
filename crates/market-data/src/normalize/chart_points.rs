use log::debug;
use rust_decimal::Decimal;

use crate::models::{
    ActiveAddressesResponse, ChartPoint, DexLiquiditiesResponse, DexVolumesResponse,
    GlobalMarketPoint, GlobalMarketPointRaw, ProChartPointRaw, TransactionsResponse, TvlPointRaw,
};

/// Volume flavor: primary = volume, no secondary value.
///
/// Points without a volume are dropped.
pub fn volume_points(raw_points: &[ProChartPointRaw]) -> Vec<ChartPoint> {
    raw_points
        .iter()
        .filter_map(|raw| raw.volume.map(|volume| ChartPoint::new(volume, raw.timestamp)))
        .collect()
}

/// Count flavor: primary = count promoted to decimal, secondary = volume if present.
///
/// Points without a count are dropped.
pub fn count_points(raw_points: &[ProChartPointRaw]) -> Vec<ChartPoint> {
    raw_points
        .iter()
        .filter_map(|raw| {
            raw.count.map(|count| {
                ChartPoint::with_secondary(Decimal::from(count), raw.timestamp, raw.volume)
            })
        })
        .collect()
}

pub fn tvl_points(raw_points: &[TvlPointRaw]) -> Vec<ChartPoint> {
    raw_points
        .iter()
        .filter_map(|raw| raw.tvl.map(|tvl| ChartPoint::new(tvl, raw.timestamp)))
        .collect()
}

pub fn global_market_points(raw_points: &[GlobalMarketPointRaw]) -> Vec<GlobalMarketPoint> {
    let points: Vec<GlobalMarketPoint> = raw_points
        .iter()
        .filter_map(|raw| {
            raw.market_cap.map(|market_cap| GlobalMarketPoint {
                timestamp: raw.timestamp,
                market_cap,
                volume_24h: raw.volume24h,
                dominance_btc: raw.dominance_btc,
                defi_market_cap: raw.market_cap_defi,
                tvl: raw.tvl,
            })
        })
        .collect();

    if points.len() < raw_points.len() {
        debug!(
            "Dropped {} global market points without market cap",
            raw_points.len() - points.len()
        );
    }
    points
}

impl DexLiquiditiesResponse {
    pub fn volume_points(&self) -> Vec<ChartPoint> {
        volume_points(&self.liquidity)
    }
}

impl DexVolumesResponse {
    pub fn volume_points(&self) -> Vec<ChartPoint> {
        volume_points(&self.volumes)
    }
}

impl TransactionsResponse {
    pub fn volume_points(&self) -> Vec<ChartPoint> {
        volume_points(&self.transactions)
    }

    pub fn count_points(&self) -> Vec<ChartPoint> {
        count_points(&self.transactions)
    }
}

impl ActiveAddressesResponse {
    pub fn count_points(&self) -> Vec<ChartPoint> {
        count_points(&self.addresses)
    }
}
