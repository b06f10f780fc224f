// Engine module - pure derived views over the static dataset.
// Every function here is recomputed on each render; inputs are small and fixed.

pub mod certainty;
pub mod chart;
pub mod citations;
pub mod distribution;
pub mod geometry;
pub mod inscriptions;
pub mod profile;
pub mod share;

pub use certainty::{certainty_split, CertaintySplit};
pub use chart::{tooltip, ChartDatum, Tooltip, TooltipRow};
pub use citations::{category_citations, vowel_breakdown, Citation, VowelCategoryView};
pub use distribution::{region_distribution, RegionShare};
pub use geometry::{contains, district_at};
pub use inscriptions::{filter_inscriptions, InscriptionFilter};
pub use profile::{
    alphabet_breakdown, chronology_series, dialect_context, region_detail, theme_radar,
    theme_series, RegionDetail, RegionStat, SeriesPoint,
};
pub use share::{percent, shares, Share};
