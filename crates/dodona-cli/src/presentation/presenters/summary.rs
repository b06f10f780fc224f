use dodona_engine::percent;
use dodona_types::{Dataset, RegionId};

use crate::presentation::view_models::SummaryViewModel;

pub fn present_summary(data: &Dataset) -> SummaryViewModel {
    let totals = &data.totals;
    let regions_with_data = data
        .districts
        .iter()
        .filter(|d| data.has_data(d.id))
        .count();
    let unassigned = data.region(RegionId::General).map_or(0, |r| r.count);

    SummaryViewModel {
        thessalian: totals.thessalian,
        thessalian_unique: totals.thessalian_unique,
        dialect_classified: totals.dialect_classified,
        thessalian_share_percent: percent(totals.thessalian, totals.dialect_classified),
        corpus: totals.corpus,
        regions_with_data,
        unassigned,
        vowel_evidence: totals.vowel_evidence,
        span_label: totals.span_label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dodona_core::dataset;

    #[test]
    fn test_summary_headline() {
        let summary = present_summary(dataset());
        assert_eq!(summary.thessalian, 81);
        assert_eq!(summary.thessalian_unique, 75);
        assert_eq!(summary.regions_with_data, 3);
        assert_eq!(summary.unassigned, 57);
        assert!((summary.thessalian_share_percent - 10.049_627_791_563_276).abs() < 1e-9);
    }
}
