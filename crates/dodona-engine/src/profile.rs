use dodona_types::{AlphabetShare, ChronologyBucket, DialectShare, Region, RegionId, ThemeBucket};
use serde::Serialize;

use crate::share::{percent, Share};

/// One bar of a categorical chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: u32,
    /// Drawn with emphasis (Thessalian among the dialects)
    pub highlighted: bool,
    /// Drawn muted (the undeterminable theme bucket)
    pub dimmed: bool,
}

impl SeriesPoint {
    fn plain(label: &'static str, value: u32) -> Self {
        Self {
            label,
            value,
            highlighted: false,
            dimmed: false,
        }
    }
}

/// A single labelled figure of the region detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionStat {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionDetail {
    pub id: RegionId,
    pub display_name: &'static str,
    pub english_name: &'static str,
    pub total: u32,
    /// Total, then name-only when non-zero
    pub counts: Vec<RegionStat>,
    /// Period V, transition V–IV, then no-date when non-zero
    pub chronology: Vec<RegionStat>,
}

pub fn chronology_series(buckets: &[ChronologyBucket]) -> Vec<SeriesPoint> {
    buckets
        .iter()
        .map(|b| SeriesPoint::plain(b.period_label, b.inscription_count))
        .collect()
}

pub fn theme_series(themes: &[ThemeBucket]) -> Vec<SeriesPoint> {
    themes
        .iter()
        .map(|t| SeriesPoint {
            dimmed: t.unknown,
            ..SeriesPoint::plain(t.theme_name, t.inscription_count)
        })
        .collect()
}

/// Themes with a determinable topic; the radar leaves the unknown bucket out.
pub fn theme_radar(themes: &[ThemeBucket]) -> Vec<SeriesPoint> {
    themes
        .iter()
        .filter(|t| !t.unknown)
        .map(|t| SeriesPoint::plain(t.theme_name, t.inscription_count))
        .collect()
}

pub fn dialect_context(dialects: &[DialectShare]) -> Vec<SeriesPoint> {
    dialects
        .iter()
        .map(|d| SeriesPoint {
            highlighted: d.highlighted,
            ..SeriesPoint::plain(d.dialect_name, d.inscription_count)
        })
        .collect()
}

/// Alphabet groups with their share of `total` (the Thessalian inscriptions).
pub fn alphabet_breakdown(alphabets: &[AlphabetShare], total: u32) -> Vec<Share> {
    alphabets
        .iter()
        .map(|a| Share {
            label: a.alphabet_name.to_string(),
            value: a.inscription_count,
            percent_share: percent(a.inscription_count, total),
        })
        .collect()
}

pub fn region_detail(region: &Region) -> RegionDetail {
    let mut counts = vec![RegionStat {
        label: "Total",
        value: region.count,
    }];
    if region.name_only_count > 0 {
        counts.push(RegionStat {
            label: "Name only",
            value: region.name_only_count,
        });
    }

    let mut chronology = vec![
        RegionStat {
            label: "V BC",
            value: region.period_v_count,
        },
        RegionStat {
            label: "Transition V–IV",
            value: region.period_transition_count,
        },
    ];
    if region.no_date_count > 0 {
        chronology.push(RegionStat {
            label: "No date",
            value: region.no_date_count,
        });
    }

    RegionDetail {
        id: region.id,
        display_name: region.display_name,
        english_name: region.english_name,
        total: region.count,
        counts,
        chronology,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dodona_core::dataset;

    #[test]
    fn test_radar_excludes_unknown() {
        let data = dataset();
        let radar = theme_radar(&data.themes);
        assert_eq!(radar.len(), data.themes.len() - 1);
        assert!(radar.iter().all(|p| p.label != "Unknown"));

        let series = theme_series(&data.themes);
        let unknown = series.iter().find(|p| p.label == "Unknown").unwrap();
        assert!(unknown.dimmed);
    }

    #[test]
    fn test_dialect_context_highlights_thessalian() {
        let context = dialect_context(&dataset().dialects);
        let highlighted: Vec<_> = context.iter().filter(|p| p.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].label, "Thessalian");
        assert_eq!(highlighted[0].value, 81);
    }

    #[test]
    fn test_chronology_keeps_period_order() {
        let series = chronology_series(&dataset().chronology);
        assert_eq!(series.first().map(|p| p.label), Some("Early V"));
        assert_eq!(series.last().map(|p| p.label), Some("III–II"));
    }

    #[test]
    fn test_alphabet_shares_of_thessalian_total() {
        let breakdown = alphabet_breakdown(&dataset().alphabets, 81);
        assert_eq!(breakdown[0].value, 70);
        assert!((breakdown[0].percent_share - 70.0 * 100.0 / 81.0).abs() < 1e-9);
    }

    #[test]
    fn test_alphabet_partial_listing_uses_total() {
        let partial = [AlphabetShare {
            alphabet_name: "Dodona",
            inscription_count: 3,
        }];
        let breakdown = alphabet_breakdown(&partial, 81);
        assert!((breakdown[0].percent_share - 300.0 / 81.0).abs() < 1e-9);
        assert!(alphabet_breakdown(&[], 0).is_empty());
    }

    #[test]
    fn test_region_detail_hides_zero_stats() {
        let data = dataset();
        let pelasgiotis = region_detail(data.region(RegionId::Pelasgiotis).unwrap());
        assert_eq!(pelasgiotis.total, 11);
        assert_eq!(pelasgiotis.counts.len(), 1);
        assert_eq!(pelasgiotis.chronology.len(), 3);

        let thessaliotis = region_detail(data.region(RegionId::Thessaliotis).unwrap());
        let labels: Vec<_> = thessaliotis.chronology.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["V BC", "Transition V–IV"]);

        let general = region_detail(data.region(RegionId::General).unwrap());
        assert_eq!(general.counts[1], RegionStat { label: "Name only", value: 2 });
    }
}
