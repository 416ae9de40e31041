use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RankMultiValueRaw, RankValueRaw, TimePeriod};

/// A coin's value in a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedValue {
    pub uid: String,
    pub value: Decimal,
}

/// Projects multi-window rank rows onto one window.
///
/// Only `Day1`, `Week1` and `Month1` have a column; other periods yield
/// nothing. Rows without a value for the window are dropped.
pub fn ranked_values_for(rows: &[RankMultiValueRaw], period: TimePeriod) -> Vec<RankedValue> {
    rows.iter()
        .filter_map(|row| {
            let value = match period {
                TimePeriod::Day1 => row.value_1d,
                TimePeriod::Week1 => row.value_7d,
                TimePeriod::Month1 => row.value_30d,
                _ => None,
            }?;
            Some(RankedValue {
                uid: row.uid.clone(),
                value,
            })
        })
        .collect()
}

pub fn ranked_values(rows: &[RankValueRaw]) -> Vec<RankedValue> {
    rows.iter()
        .filter_map(|row| {
            row.value.map(|value| RankedValue {
                uid: row.uid.clone(),
                value,
            })
        })
        .collect()
}
