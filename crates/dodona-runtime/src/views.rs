use dodona_engine::{
    self as engine, CertaintySplit, Citation, InscriptionFilter, RegionDetail, RegionShare,
    SeriesPoint, Share, VowelCategoryView,
};
use dodona_types::{Dataset, InscriptionExample, RegionId, VowelCategory};

/// Source of every derived view a screen or command can show.
///
/// Presenters only talk to this trait, so a test double can observe which
/// views a render actually derives.
pub trait DerivedViews {
    fn region_distribution(&self) -> Vec<RegionShare>;
    fn certainty_split(&self) -> CertaintySplit;
    fn region_detail(&self, id: RegionId) -> Option<RegionDetail>;
    fn chronology_series(&self) -> Vec<SeriesPoint>;
    fn theme_series(&self) -> Vec<SeriesPoint>;
    fn theme_radar(&self) -> Vec<SeriesPoint>;
    fn dialect_context(&self) -> Vec<SeriesPoint>;
    fn alphabet_breakdown(&self) -> Vec<Share>;
    fn vowel_breakdown(&self) -> Vec<VowelCategoryView>;
    fn category_citations(&self, category: VowelCategory) -> Vec<Citation>;
    fn inscriptions(&self, filter: &InscriptionFilter) -> Vec<InscriptionExample>;
}

/// `DerivedViews` computed on demand by `dodona-engine`. Nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct EngineViews<'a> {
    data: &'a Dataset,
}

impl<'a> EngineViews<'a> {
    pub fn new(data: &'a Dataset) -> Self {
        Self { data }
    }
}

impl DerivedViews for EngineViews<'_> {
    fn region_distribution(&self) -> Vec<RegionShare> {
        engine::region_distribution(&self.data.regions)
    }

    fn certainty_split(&self) -> CertaintySplit {
        engine::certainty_split(&self.data.regions)
    }

    fn region_detail(&self, id: RegionId) -> Option<RegionDetail> {
        self.data.region(id).map(engine::region_detail)
    }

    fn chronology_series(&self) -> Vec<SeriesPoint> {
        engine::chronology_series(&self.data.chronology)
    }

    fn theme_series(&self) -> Vec<SeriesPoint> {
        engine::theme_series(&self.data.themes)
    }

    fn theme_radar(&self) -> Vec<SeriesPoint> {
        engine::theme_radar(&self.data.themes)
    }

    fn dialect_context(&self) -> Vec<SeriesPoint> {
        engine::dialect_context(&self.data.dialects)
    }

    fn alphabet_breakdown(&self) -> Vec<Share> {
        engine::alphabet_breakdown(&self.data.alphabets, self.data.totals.thessalian)
    }

    fn vowel_breakdown(&self) -> Vec<VowelCategoryView> {
        engine::vowel_breakdown(&self.data.vowel_categories)
    }

    fn category_citations(&self, category: VowelCategory) -> Vec<Citation> {
        engine::category_citations(&self.data.vowel_categories, category)
    }

    fn inscriptions(&self, filter: &InscriptionFilter) -> Vec<InscriptionExample> {
        engine::filter_inscriptions(&self.data.inscriptions, filter)
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dodona_core::dataset;

    #[test]
    fn test_region_shares_sum_to_hundred() {
        let views = EngineViews::new(dataset());
        let sum: f64 = views
            .region_distribution()
            .iter()
            .map(|r| r.percent_share)
            .sum();
        assert!((sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_certainty_split_matches_total() {
        let views = EngineViews::new(dataset());
        assert_eq!(views.certainty_split().total(), dataset().totals.thessalian);
    }

    #[test]
    fn test_detail_missing_for_data_less_region() {
        let views = EngineViews::new(dataset());
        assert!(views.region_detail(RegionId::Phthiotis).is_none());
        assert_eq!(
            views.region_detail(RegionId::Histiaiotis).map(|d| d.total),
            Some(8)
        );
    }
}
