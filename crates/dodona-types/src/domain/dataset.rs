use serde::Serialize;

use super::{
    AlphabetShare, ChronologyBucket, DialectShare, InscriptionExample, MapDistrict, MapLandmark,
    OrthographyRow, Region, RegionId, ThemeBucket, VowelCategory, VowelNotationCategory,
    VowelTheory,
};

/// Headline figures of the corpus that are not derivable from the tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusTotals {
    /// Thessalian attributions, counting duplicated inscriptions twice
    pub thessalian: u32,
    pub thessalian_unique: u32,
    /// Inscriptions of the whole corpus that carry a dialect classification
    pub dialect_classified: u32,
    pub corpus: u32,
    /// Reformed-alphabet inscriptions with identifiable vowel spellings
    pub vowel_evidence: u32,
    pub span_label: &'static str,
}

/// The complete reference data set behind the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub totals: CorpusTotals,
    pub regions: Vec<Region>,
    pub districts: Vec<MapDistrict>,
    pub landmarks: Vec<MapLandmark>,
    pub chronology: Vec<ChronologyBucket>,
    pub themes: Vec<ThemeBucket>,
    pub dialects: Vec<DialectShare>,
    pub alphabets: Vec<AlphabetShare>,
    pub vowel_categories: Vec<VowelNotationCategory>,
    pub inscriptions: Vec<InscriptionExample>,
    pub orthography: Vec<OrthographyRow>,
    pub theories: Vec<VowelTheory>,
}

impl Dataset {
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Whether the region has inscriptions and can therefore be selected.
    pub fn has_data(&self, id: RegionId) -> bool {
        self.region(id).is_some_and(|r| r.count > 0)
    }

    pub fn district(&self, id: RegionId) -> Option<&MapDistrict> {
        self.districts.iter().find(|d| d.id == id)
    }

    pub fn vowel_category(&self, category: VowelCategory) -> Option<&VowelNotationCategory> {
        self.vowel_categories
            .iter()
            .find(|c| c.category == category)
    }

    /// Region ids in navigation order: map districts first, then the
    /// unassigned bucket, each listed once.
    pub fn navigable_regions(&self) -> Vec<RegionId> {
        let mut ids: Vec<RegionId> = self.districts.iter().map(|d| d.id).collect();
        for region in &self.regions {
            if !ids.contains(&region.id) {
                ids.push(region.id);
            }
        }
        ids
    }
}
