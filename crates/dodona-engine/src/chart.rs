use dodona_types::{RegionId, VowelCategory};
use serde::Serialize;

/// The datum under the chart cursor, tagged by the chart it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "chart", rename_all = "snake_case")]
pub enum ChartDatum {
    Region {
        id: RegionId,
        label: String,
        value: u32,
        percent_share: f64,
    },
    Certainty {
        label: String,
        value: u32,
        percent_share: f64,
    },
    Chronology {
        period_label: String,
        value: u32,
    },
    Theme {
        theme_name: String,
        value: u32,
        unknown: bool,
    },
    Dialect {
        dialect_name: String,
        value: u32,
        highlighted: bool,
    },
    Vowel {
        category: VowelCategory,
        label: String,
        value: u32,
        percent_share: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub title: String,
    pub rows: Vec<TooltipRow>,
    pub note: Option<String>,
}

fn row(label: &str, value: impl ToString) -> TooltipRow {
    TooltipRow {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn share(percent_share: f64) -> String {
    format!("{:.1}%", percent_share)
}

pub fn tooltip(datum: &ChartDatum) -> Tooltip {
    match datum {
        ChartDatum::Region {
            id,
            label,
            value,
            percent_share,
        } => Tooltip {
            title: label.clone(),
            rows: vec![row("Inscriptions", value), row("Share", share(*percent_share))],
            note: (*id == RegionId::General).then(|| "No regional attribution".to_string()),
        },
        ChartDatum::Certainty {
            label,
            value,
            percent_share,
        } => Tooltip {
            title: label.clone(),
            rows: vec![row("Inscriptions", value), row("Share", share(*percent_share))],
            note: None,
        },
        ChartDatum::Chronology {
            period_label,
            value,
        } => Tooltip {
            title: period_label.clone(),
            rows: vec![row("Inscriptions", value)],
            note: None,
        },
        ChartDatum::Theme {
            theme_name,
            value,
            unknown,
        } => Tooltip {
            title: theme_name.clone(),
            rows: vec![row("Consultations", value)],
            note: unknown.then(|| "Topic cannot be determined".to_string()),
        },
        ChartDatum::Dialect {
            dialect_name,
            value,
            highlighted,
        } => Tooltip {
            title: dialect_name.clone(),
            rows: vec![row("Inscriptions", value)],
            note: highlighted.then(|| "Subject of this dashboard".to_string()),
        },
        ChartDatum::Vowel {
            category,
            label,
            value,
            percent_share,
        } => Tooltip {
            title: format!("Category {}: {}", category, label),
            rows: vec![row("Inscriptions", value), row("Share", share(*percent_share))],
            note: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_tooltip() {
        let tip = tooltip(&ChartDatum::Region {
            id: RegionId::Pelasgiotis,
            label: "Pelasg.".to_string(),
            value: 11,
            percent_share: 11.0 * 100.0 / 81.0,
        });
        assert_eq!(tip.title, "Pelasg.");
        assert_eq!(tip.rows[0].value, "11");
        assert_eq!(tip.rows[1].value, "13.6%");
        assert_eq!(tip.note, None);
    }

    #[test]
    fn test_unknown_theme_carries_note() {
        let tip = tooltip(&ChartDatum::Theme {
            theme_name: "Unknown".to_string(),
            value: 15,
            unknown: true,
        });
        assert!(tip.note.is_some());
    }

    #[test]
    fn test_vowel_tooltip_snapshot() {
        let tip = tooltip(&ChartDatum::Vowel {
            category: VowelCategory::EtaOmega,
            label: "⟨Η⟩ ⟨Ω⟩ without ⟨ΕΙ⟩ ⟨ΟΥ⟩".to_string(),
            value: 4,
            percent_share: 4.0 * 100.0 / 19.0,
        });
        insta::assert_json_snapshot!(tip, @r###"
        {
          "title": "Category 3: ⟨Η⟩ ⟨Ω⟩ without ⟨ΕΙ⟩ ⟨ΟΥ⟩",
          "rows": [
            {
              "label": "Inscriptions",
              "value": "4"
            },
            {
              "label": "Share",
              "value": "21.1%"
            }
          ],
          "note": null
        }
        "###);
    }
}
