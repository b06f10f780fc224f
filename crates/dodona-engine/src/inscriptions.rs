use dodona_types::{InscriptionExample, RegionId, VowelCategory};
use serde::Serialize;

/// Optional constraints on the evidence table; an empty filter keeps every row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InscriptionFilter {
    pub category: Option<VowelCategory>,
    pub region: Option<RegionId>,
}

impl InscriptionFilter {
    pub fn matches(&self, example: &InscriptionExample) -> bool {
        let category_ok = self.category.is_none_or(|c| c == example.category);
        // A probable attribution ("Histiot.?") still counts for its region.
        let region_ok = self
            .region
            .is_none_or(|r| example.region.region == Some(r));
        category_ok && region_ok
    }
}

pub fn filter_inscriptions<'a>(
    examples: &'a [InscriptionExample],
    filter: &InscriptionFilter,
) -> Vec<&'a InscriptionExample> {
    examples.iter().filter(|e| filter.matches(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dodona_core::dataset;

    #[test]
    fn test_empty_filter_keeps_all_rows() {
        let rows = filter_inscriptions(&dataset().inscriptions, &InscriptionFilter::default());
        assert_eq!(rows.len(), 19);
    }

    #[test]
    fn test_filter_by_category() {
        let filter = InscriptionFilter {
            category: Some(VowelCategory::EtaOmega),
            region: None,
        };
        let rows = filter_inscriptions(&dataset().inscriptions, &filter);
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_uncertain_attribution_matches_region() {
        let filter = InscriptionFilter {
            category: Some(VowelCategory::Mixed),
            region: Some(RegionId::Histiaiotis),
        };
        let rows = filter_inscriptions(&dataset().inscriptions, &filter);
        let ids: Vec<_> = rows.iter().map(|r| r.source_reference.inscription_id).collect();
        assert_eq!(ids, vec!["217A", "1340A", "2204A"]);
        assert!(rows.iter().all(|r| r.region.uncertain));
    }

    #[test]
    fn test_region_without_examples() {
        let filter = InscriptionFilter {
            category: None,
            region: Some(RegionId::Phthiotis),
        };
        assert!(filter_inscriptions(&dataset().inscriptions, &filter).is_empty());
    }
}
