use dodona_types::{Corpus, VowelCategory, VowelNotationCategory};
use serde::Serialize;

use crate::share::percent;

/// A formatted reference to one inscription, e.g. `I. Dodone DVC 31A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub corpus: Corpus,
    pub inscription_id: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VowelCategoryView {
    pub category: VowelCategory,
    pub label: &'static str,
    pub description: &'static str,
    pub color_token: &'static str,
    pub count: u32,
    pub percent_share: f64,
    pub references: usize,
}

/// The category's source references as citations, in listing order.
///
/// A category missing from `categories` yields an empty list.
pub fn category_citations(
    categories: &[VowelNotationCategory],
    category: VowelCategory,
) -> Vec<Citation> {
    categories
        .iter()
        .find(|c| c.category == category)
        .map(|c| {
            c.source_references
                .iter()
                .map(|r| Citation {
                    corpus: r.corpus,
                    inscription_id: r.inscription_id,
                    text: r.citation(),
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn vowel_breakdown(categories: &[VowelNotationCategory]) -> Vec<VowelCategoryView> {
    let total: u32 = categories.iter().map(|c| c.count).sum();

    categories
        .iter()
        .map(|c| VowelCategoryView {
            category: c.category,
            label: c.label,
            description: c.description,
            color_token: c.color_token,
            count: c.count,
            percent_share: percent(c.count, total),
            references: c.source_references.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dodona_core::dataset;

    #[test]
    fn test_citations_keep_listing_order() {
        let citations = category_citations(&dataset().vowel_categories, VowelCategory::EtaOmega);
        let texts: Vec<&str> = citations.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "I. Dodone DVC 556A",
                "I. Dodone DVC 992A",
                "I. Dodone DVC 1416A",
                "I. Dodone Lhôte 8B",
            ]
        );
    }

    #[test]
    fn test_missing_category_gives_empty_list() {
        assert!(category_citations(&[], VowelCategory::Mixed).is_empty());
    }

    #[test]
    fn test_breakdown_counts_and_shares() {
        let view = vowel_breakdown(&dataset().vowel_categories);
        let counts: Vec<u32> = view.iter().map(|v| v.count).collect();
        assert_eq!(counts, vec![6, 9, 4]);

        let sum: f64 = view.iter().map(|v| v.percent_share).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(view[1].references, 9);
    }
}
