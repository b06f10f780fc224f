use dodona_runtime::DerivedViews;
use dodona_types::Dataset;

use super::region::present_certainty;
use super::{bars, share_rows};
use crate::presentation::view_models::ProfileViewModel;

/// `cursor` points into the chronology bars followed by the theme bars.
pub fn present_profile(
    data: &Dataset,
    views: &impl DerivedViews,
    cursor: Option<usize>,
) -> ProfileViewModel {
    let chronology_len = data.chronology.len();
    let chronology_cursor = cursor.filter(|&c| c < chronology_len);
    let theme_cursor = cursor.and_then(|c| c.checked_sub(chronology_len));

    ProfileViewModel {
        certainty: present_certainty(views.certainty_split()),
        chronology: bars(views.chronology_series(), chronology_cursor),
        themes: bars(views.theme_series(), theme_cursor),
        theme_radar: bars(views.theme_radar(), None),
        alphabets: share_rows(views.alphabet_breakdown()),
        alphabet_note: alphabet_note(data),
        dialect_context: bars(views.dialect_context(), None),
    }
}

fn alphabet_note(data: &Dataset) -> String {
    let total = data.totals.thessalian;
    let Some((reformed, local)) = data.alphabets.split_first() else {
        return String::new();
    };
    let local_total: u32 = local.iter().map(|a| a.inscription_count).sum();
    let local_list = local
        .iter()
        .map(|a| format!("{} {}", a.inscription_count, a.alphabet_name))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}/{} Thessalian inscriptions use the {} alphabet. Only {} keep a local script ({}). \
         Epichoric alphabets cannot tell the mid-long vowels apart.",
        reformed.inscription_count, total, reformed.alphabet_name, local_total, local_list
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dodona_core::dataset;
    use dodona_runtime::EngineViews;

    #[test]
    fn test_cursor_lands_in_themes_after_chronology() {
        let views = EngineViews::new(dataset());
        let profile = present_profile(dataset(), &views, Some(dataset().chronology.len() + 1));
        assert!(profile.chronology.iter().all(|b| !b.focused));
        assert!(profile.themes[1].focused);
    }

    #[test]
    fn test_radar_leaves_out_unknown() {
        let views = EngineViews::new(dataset());
        let profile = present_profile(dataset(), &views, None);
        assert_eq!(profile.theme_radar.len(), profile.themes.len() - 1);
        assert!(profile.themes.iter().any(|t| t.dimmed));
    }

    #[test]
    fn test_alphabet_note_counts() {
        let note = alphabet_note(dataset());
        assert!(note.starts_with("70/81"));
        assert!(note.contains("Only 11 keep a local script"));
    }
}
