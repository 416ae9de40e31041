use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AnalyticsRaw, ChartPoint, CountPointRaw, TvlValuePointRaw, VolumePointRaw,
};

/// A ranked analytics section with its normalized series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSeries {
    pub rank: Option<i32>,
    /// Section-level figure (30d count, 30d volume, TVL ratio), when the section has one.
    pub aggregate: Option<Decimal>,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedFigure {
    pub rank: Option<i32>,
    pub value: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderCount {
    pub blockchain_uid: String,
    pub count: Decimal,
}

/// Analytics overview with every series normalized into `ChartPoint`s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinAnalytics {
    pub cex_volume: Option<RankedSeries>,
    pub dex_volume: Option<RankedSeries>,
    pub dex_liquidity: Option<RankedSeries>,
    pub addresses: Option<RankedSeries>,
    pub transactions: Option<RankedSeries>,
    pub tvl: Option<RankedSeries>,
    pub revenue: Option<RankedFigure>,
    pub reports: Option<i32>,
    pub funds_invested: Option<Decimal>,
    pub treasuries: Option<Decimal>,
    pub holders: Vec<HolderCount>,
    pub holders_rank: Option<i32>,
}

fn volume_series(points: &[VolumePointRaw]) -> Vec<ChartPoint> {
    points
        .iter()
        .filter_map(|p| p.volume.map(|v| ChartPoint::new(v, p.timestamp)))
        .collect()
}

fn tvl_series(points: &[TvlValuePointRaw]) -> Vec<ChartPoint> {
    points
        .iter()
        .filter_map(|p| p.tvl.map(|v| ChartPoint::new(v, p.timestamp)))
        .collect()
}

fn count_series(points: &[CountPointRaw]) -> Vec<ChartPoint> {
    points
        .iter()
        .filter_map(|p| p.count.map(|v| ChartPoint::new(v, p.timestamp)))
        .collect()
}

impl From<AnalyticsRaw> for CoinAnalytics {
    fn from(raw: AnalyticsRaw) -> Self {
        CoinAnalytics {
            cex_volume: raw.cex_volume.map(|s| RankedSeries {
                rank: s.rank_30d,
                aggregate: None,
                points: volume_series(&s.points),
            }),
            dex_volume: raw.dex_volume.map(|s| RankedSeries {
                rank: s.rank_30d,
                aggregate: None,
                points: volume_series(&s.points),
            }),
            dex_liquidity: raw.dex_liquidity.map(|s| RankedSeries {
                rank: s.rank,
                aggregate: None,
                points: volume_series(&s.points),
            }),
            addresses: raw.addresses.map(|s| RankedSeries {
                rank: s.rank_30d,
                aggregate: s.count_30d.map(Decimal::from),
                points: count_series(&s.points),
            }),
            transactions: raw.transactions.map(|s| RankedSeries {
                rank: s.rank_30d,
                aggregate: s.volume_30d,
                points: count_series(&s.points),
            }),
            tvl: raw.tvl.map(|s| RankedSeries {
                rank: s.rank,
                aggregate: s.ratio,
                points: tvl_series(&s.points),
            }),
            revenue: raw.revenue.map(|r| RankedFigure {
                rank: r.rank_30d,
                value: r.value_30d,
            }),
            reports: raw.reports,
            funds_invested: raw.funds_invested,
            treasuries: raw.treasuries,
            holders: raw
                .holders
                .unwrap_or_default()
                .into_iter()
                .filter_map(|h| {
                    h.holders_count.map(|count| HolderCount {
                        blockchain_uid: h.blockchain_uid,
                        count,
                    })
                })
                .collect(),
            holders_rank: raw.holders_rank,
        }
    }
}
