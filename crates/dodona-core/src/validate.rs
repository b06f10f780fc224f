use dodona_types::{Dataset, RegionId, SourceReference, VowelCategory};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A broken cross-table invariant in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    DuplicateRegion {
        region: RegionId,
    },
    CertaintyMismatch {
        region: RegionId,
        count: u32,
        certainty_total: u32,
    },
    ChronologyMismatch {
        region: RegionId,
        count: u32,
        chronology_total: u32,
    },
    RegionTotalMismatch {
        expected: u32,
        actual: u32,
    },
    MissingVowelCategory {
        category: VowelCategory,
    },
    VowelCountMismatch {
        category: VowelCategory,
        count: u32,
        references: usize,
    },
    VowelTotalMismatch {
        expected: u32,
        actual: u32,
    },
    UnlistedReference {
        citation: String,
        category: VowelCategory,
    },
    MissingExample {
        citation: String,
        category: VowelCategory,
    },
    DialectTotalMismatch {
        expected: u32,
        actual: u32,
    },
    HighlightedDialectMismatch {
        expected: u32,
        actual: u32,
    },
    AlphabetTotalMismatch {
        expected: u32,
        actual: u32,
    },
    DuplicateDistrict {
        region: RegionId,
    },
}

impl ValidationIssue {
    /// Stable snake_case name of the issue, as used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationIssue::DuplicateRegion { .. } => "duplicate_region",
            ValidationIssue::CertaintyMismatch { .. } => "certainty_mismatch",
            ValidationIssue::ChronologyMismatch { .. } => "chronology_mismatch",
            ValidationIssue::RegionTotalMismatch { .. } => "region_total_mismatch",
            ValidationIssue::MissingVowelCategory { .. } => "missing_vowel_category",
            ValidationIssue::VowelCountMismatch { .. } => "vowel_count_mismatch",
            ValidationIssue::VowelTotalMismatch { .. } => "vowel_total_mismatch",
            ValidationIssue::UnlistedReference { .. } => "unlisted_reference",
            ValidationIssue::MissingExample { .. } => "missing_example",
            ValidationIssue::DialectTotalMismatch { .. } => "dialect_total_mismatch",
            ValidationIssue::HighlightedDialectMismatch { .. } => "highlighted_dialect_mismatch",
            ValidationIssue::AlphabetTotalMismatch { .. } => "alphabet_total_mismatch",
            ValidationIssue::DuplicateDistrict { .. } => "duplicate_district",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateRegion { region } => {
                write!(f, "region '{}' is listed more than once", region)
            }
            ValidationIssue::CertaintyMismatch {
                region,
                count,
                certainty_total,
            } => write!(
                f,
                "region '{}': count {} but certain+uncertain+name-only = {}",
                region, count, certainty_total
            ),
            ValidationIssue::ChronologyMismatch {
                region,
                count,
                chronology_total,
            } => write!(
                f,
                "region '{}': count {} but period V+transition+undated = {}",
                region, count, chronology_total
            ),
            ValidationIssue::RegionTotalMismatch { expected, actual } => write!(
                f,
                "region counts sum to {} but the Thessalian total is {}",
                actual, expected
            ),
            ValidationIssue::MissingVowelCategory { category } => {
                write!(f, "vowel notation category {} is missing", category)
            }
            ValidationIssue::VowelCountMismatch {
                category,
                count,
                references,
            } => write!(
                f,
                "vowel category {}: count {} but {} source references",
                category, count, references
            ),
            ValidationIssue::VowelTotalMismatch { expected, actual } => write!(
                f,
                "vowel categories sum to {} but {} inscriptions carry vowel evidence",
                actual, expected
            ),
            ValidationIssue::UnlistedReference { citation, category } => write!(
                f,
                "{} is in the inscription table (category {}) but not in that category's references",
                citation, category
            ),
            ValidationIssue::MissingExample { citation, category } => write!(
                f,
                "{} is referenced by category {} but has no inscription table row",
                citation, category
            ),
            ValidationIssue::DialectTotalMismatch { expected, actual } => write!(
                f,
                "dialect groups sum to {} but {} inscriptions are dialect-classified",
                actual, expected
            ),
            ValidationIssue::HighlightedDialectMismatch { expected, actual } => write!(
                f,
                "highlighted dialect group has {} inscriptions, expected {}",
                actual, expected
            ),
            ValidationIssue::AlphabetTotalMismatch { expected, actual } => write!(
                f,
                "alphabet groups sum to {} but the Thessalian total is {}",
                actual, expected
            ),
            ValidationIssue::DuplicateDistrict { region } => {
                write!(f, "map district '{}' is drawn more than once", region)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check the invariants the tables are expected to satisfy.
///
/// Never fails; every broken invariant becomes one issue in the report.
pub fn validate(data: &Dataset) -> ValidationReport {
    let mut issues = Vec::new();

    check_regions(data, &mut issues);
    check_vowels(data, &mut issues);
    check_series(data, &mut issues);

    ValidationReport { issues }
}

fn check_regions(data: &Dataset, issues: &mut Vec<ValidationIssue>) {
    let mut seen = HashSet::new();
    for region in &data.regions {
        if !seen.insert(region.id) {
            issues.push(ValidationIssue::DuplicateRegion { region: region.id });
        }
        if region.certainty_total() != region.count {
            issues.push(ValidationIssue::CertaintyMismatch {
                region: region.id,
                count: region.count,
                certainty_total: region.certainty_total(),
            });
        }
        if region.chronology_total() != region.count {
            issues.push(ValidationIssue::ChronologyMismatch {
                region: region.id,
                count: region.count,
                chronology_total: region.chronology_total(),
            });
        }
    }

    let actual: u32 = data.regions.iter().map(|r| r.count).sum();
    if actual != data.totals.thessalian {
        issues.push(ValidationIssue::RegionTotalMismatch {
            expected: data.totals.thessalian,
            actual,
        });
    }

    let mut drawn = HashSet::new();
    for district in &data.districts {
        if !drawn.insert(district.id) {
            issues.push(ValidationIssue::DuplicateDistrict {
                region: district.id,
            });
        }
    }
}

fn check_vowels(data: &Dataset, issues: &mut Vec<ValidationIssue>) {
    for category in VowelCategory::ALL {
        if data.vowel_category(category).is_none() {
            issues.push(ValidationIssue::MissingVowelCategory { category });
        }
    }

    for category in &data.vowel_categories {
        if category.count as usize != category.source_references.len() {
            issues.push(ValidationIssue::VowelCountMismatch {
                category: category.category,
                count: category.count,
                references: category.source_references.len(),
            });
        }
    }

    let actual: u32 = data.vowel_categories.iter().map(|c| c.count).sum();
    if actual != data.totals.vowel_evidence {
        issues.push(ValidationIssue::VowelTotalMismatch {
            expected: data.totals.vowel_evidence,
            actual,
        });
    }

    let listed: HashSet<(VowelCategory, SourceReference)> = data
        .vowel_categories
        .iter()
        .flat_map(|c| c.source_references.iter().map(|r| (c.category, *r)))
        .collect();
    let tabled: HashSet<(VowelCategory, SourceReference)> = data
        .inscriptions
        .iter()
        .map(|e| (e.category, e.source_reference))
        .collect();

    for example in &data.inscriptions {
        if !listed.contains(&(example.category, example.source_reference)) {
            issues.push(ValidationIssue::UnlistedReference {
                citation: example.source_reference.citation(),
                category: example.category,
            });
        }
    }
    for category in &data.vowel_categories {
        for reference in &category.source_references {
            if !tabled.contains(&(category.category, *reference)) {
                issues.push(ValidationIssue::MissingExample {
                    citation: reference.citation(),
                    category: category.category,
                });
            }
        }
    }
}

fn check_series(data: &Dataset, issues: &mut Vec<ValidationIssue>) {
    let dialects: u32 = data.dialects.iter().map(|d| d.inscription_count).sum();
    if dialects != data.totals.dialect_classified {
        issues.push(ValidationIssue::DialectTotalMismatch {
            expected: data.totals.dialect_classified,
            actual: dialects,
        });
    }

    let highlighted: u32 = data
        .dialects
        .iter()
        .filter(|d| d.highlighted)
        .map(|d| d.inscription_count)
        .sum();
    if highlighted != data.totals.thessalian {
        issues.push(ValidationIssue::HighlightedDialectMismatch {
            expected: data.totals.thessalian,
            actual: highlighted,
        });
    }

    let alphabets: u32 = data.alphabets.iter().map(|a| a.inscription_count).sum();
    if alphabets != data.totals.thessalian {
        issues.push(ValidationIssue::AlphabetTotalMismatch {
            expected: data.totals.thessalian,
            actual: alphabets,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn test_compiled_dataset_is_valid() {
        let report = validate(dataset());
        assert!(report.is_valid(), "unexpected issues: {:?}", report.issues);
    }

    #[test]
    fn test_detects_certainty_mismatch() {
        let mut data = dataset().clone();
        data.regions[1].uncertain_count += 1;

        let report = validate(&data);
        assert!(report.issues.contains(&ValidationIssue::CertaintyMismatch {
            region: RegionId::Pelasgiotis,
            count: 11,
            certainty_total: 12,
        }));
    }

    #[test]
    fn test_detects_region_total_mismatch() {
        let mut data = dataset().clone();
        data.regions.pop();

        let report = validate(&data);
        assert!(report.issues.contains(&ValidationIssue::RegionTotalMismatch {
            expected: 81,
            actual: 76,
        }));
    }

    #[test]
    fn test_detects_vowel_listing_drift() {
        let mut data = dataset().clone();
        data.vowel_categories[1].source_references[8] = SourceReference::lhote("80");

        let report = validate(&data);
        assert!(report.issues.contains(&ValidationIssue::UnlistedReference {
            citation: "I. Dodone Lhôte 80A".to_string(),
            category: VowelCategory::Mixed,
        }));
        assert!(report.issues.contains(&ValidationIssue::MissingExample {
            citation: "I. Dodone Lhôte 80".to_string(),
            category: VowelCategory::Mixed,
        }));
    }

    #[test]
    fn test_detects_missing_category() {
        let mut data = dataset().clone();
        data.vowel_categories.retain(|c| c.category != VowelCategory::EtaOmega);

        let report = validate(&data);
        assert!(report.issues.contains(&ValidationIssue::MissingVowelCategory {
            category: VowelCategory::EtaOmega,
        }));
        assert!(report.issues.contains(&ValidationIssue::VowelTotalMismatch {
            expected: 19,
            actual: 15,
        }));
    }

    #[test]
    fn test_issue_messages_are_readable() {
        let issue = ValidationIssue::ChronologyMismatch {
            region: RegionId::Histiaiotis,
            count: 8,
            chronology_total: 7,
        };
        assert_eq!(
            issue.to_string(),
            "region 'histiaiotis': count 8 but period V+transition+undated = 7"
        );
    }

    #[test]
    fn test_kind_matches_json_tag() {
        let issue = ValidationIssue::DuplicateDistrict {
            region: RegionId::Phthiotis,
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["kind"], issue.kind());
    }
}
