use dodona_types::{Region, RegionId};
use serde::Serialize;

use crate::share::percent;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionShare {
    pub id: RegionId,
    pub label: &'static str,
    pub display_name: &'static str,
    pub english_name: &'static str,
    pub value: u32,
    pub percent_share: f64,
}

/// Each region's share of all regional attributions.
pub fn region_distribution(regions: &[Region]) -> Vec<RegionShare> {
    let total: u32 = regions.iter().map(|r| r.count).sum();

    regions
        .iter()
        .map(|r| RegionShare {
            id: r.id,
            label: r.short_name,
            display_name: r.display_name,
            english_name: r.english_name,
            value: r.count,
            percent_share: percent(r.count, total),
        })
        .collect()
}
