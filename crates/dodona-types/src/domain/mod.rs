mod dataset;
mod map;
mod region;
mod series;
mod tab;
mod vowel;

pub use dataset::{CorpusTotals, Dataset};
pub use map::{MapDistrict, MapLandmark, Point};
pub use region::{Region, RegionId};
pub use series::{AlphabetShare, ChronologyBucket, DialectShare, ThemeBucket};
pub use tab::Tab;
pub use vowel::{
    Corpus, InscriptionExample, InscriptionRegion, OrthographyRow, SourceReference,
    VowelCategory, VowelNotationCategory, VowelTheory,
};
