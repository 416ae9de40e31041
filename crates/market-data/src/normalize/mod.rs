//! Normalization of heterogeneous provider series.
//!
//! Provider payloads arrive as flat point lists, rank/value rows, or named
//! sections each holding a point list. Everything here reshapes them into
//! neutral records. A record missing its primary value is dropped; absence
//! of data never becomes a zero data point.

mod analytics;
mod chart_points;
mod rank;

pub use analytics::{CoinAnalytics, HolderCount, RankedFigure, RankedSeries};
pub use chart_points::{count_points, global_market_points, tvl_points, volume_points};
pub use rank::{ranked_values, ranked_values_for, RankedValue};
