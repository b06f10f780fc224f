pub mod command;
pub mod profile;
pub mod region;
pub mod screen;
pub mod summary;
pub mod system;
pub mod vowel;

pub use profile::present_profile;
pub use region::{present_certainty, present_region_detail, present_region_list};
pub use screen::{chart_len, present_screen};
pub use summary::present_summary;
pub use system::{present_config, present_config_init, present_config_path, present_validation};
pub use vowel::{present_inscriptions, present_vowel_report};

use dodona_engine::{SeriesPoint, Share};

use crate::presentation::view_models::{BarViewModel, ShareViewModel};

pub(crate) fn bars(points: Vec<SeriesPoint>, focused: Option<usize>) -> Vec<BarViewModel> {
    points
        .into_iter()
        .enumerate()
        .map(|(i, p)| BarViewModel {
            label: p.label.to_string(),
            value: p.value,
            highlighted: p.highlighted,
            dimmed: p.dimmed,
            focused: focused == Some(i),
        })
        .collect()
}

pub(crate) fn share_rows(shares: Vec<Share>) -> Vec<ShareViewModel> {
    shares
        .into_iter()
        .map(|s| ShareViewModel {
            label: s.label,
            value: s.value,
            percent_share: s.percent_share,
        })
        .collect()
}
