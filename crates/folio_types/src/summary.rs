use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Years reported by the dashboard, including the current one.
pub const SUMMARY_YEARS: i32 = 5;
pub const TOP_CITY_COUNT: i64 = 5;

#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCity {
    pub city: String,
    pub country: String,
    pub photo_count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub photo_count: i64,
    pub city_count: i64,
    pub yearly_stats: BTreeMap<i32, i64>,
    pub top_cities: Vec<TopCity>,
}

/// Photo counts for `current_year` and the preceding years, zero where a year
/// has no photos. Rows outside the window are ignored.
pub fn fill_yearly_stats(current_year: i32, rows: &[(i32, i64)]) -> BTreeMap<i32, i64> {
    let first = current_year - (SUMMARY_YEARS - 1);
    let mut stats: BTreeMap<i32, i64> = (first..=current_year).map(|year| (year, 0)).collect();

    for (year, count) in rows {
        if let Some(slot) = stats.get_mut(year) {
            *slot += count;
        }
    }

    stats
}
