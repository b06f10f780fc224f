use dodona_types::{Dataset, RegionId, Tab};
use serde::Serialize;

/// How a region is drawn on the map and in the region list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualState {
    Hovered,
    Selected,
    Neutral,
}

/// Outcome of a selection toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionChange {
    Selected(RegionId),
    Deselected(RegionId),
    /// The region has no data; the selection is unchanged
    Ignored(RegionId),
}

/// Ephemeral per-session UI state.
///
/// `selected`, when set, always names a region with data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub active_tab: Tab,
    pub hovered: Option<RegionId>,
    pub selected: Option<RegionId>,
}

impl SelectionState {
    pub fn new(active_tab: Tab) -> Self {
        Self {
            active_tab,
            hovered: None,
            selected: None,
        }
    }

    pub fn set_active_tab(&mut self, tab: Tab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }

    pub fn set_hovered_region(&mut self, region: Option<RegionId>) {
        self.hovered = region;
    }

    pub fn toggle_selected_region(&mut self, data: &Dataset, region: RegionId) -> SelectionChange {
        if !data.has_data(region) {
            return SelectionChange::Ignored(region);
        }

        if self.selected == Some(region) {
            self.selected = None;
            SelectionChange::Deselected(region)
        } else {
            self.selected = Some(region);
            SelectionChange::Selected(region)
        }
    }

    pub fn region_visual_state(&self, region: RegionId) -> VisualState {
        if self.hovered == Some(region) {
            VisualState::Hovered
        } else if self.selected == Some(region) {
            VisualState::Selected
        } else {
            VisualState::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dodona_core::dataset;

    #[test]
    fn test_toggle_twice_clears() {
        let mut state = SelectionState::default();
        for id in RegionId::ALL.into_iter().filter(|id| dataset().has_data(*id)) {
            state.toggle_selected_region(dataset(), id);
            state.toggle_selected_region(dataset(), id);
            assert_eq!(state.selected, None);
        }
    }

    #[test]
    fn test_data_less_region_never_changes_selection() {
        let mut state = SelectionState::default();
        assert_eq!(
            state.toggle_selected_region(dataset(), RegionId::Phthiotis),
            SelectionChange::Ignored(RegionId::Phthiotis)
        );
        assert_eq!(state.selected, None);

        state.toggle_selected_region(dataset(), RegionId::Histiaiotis);
        state.toggle_selected_region(dataset(), RegionId::Phthiotis);
        assert_eq!(state.selected, Some(RegionId::Histiaiotis));
    }

    #[test]
    fn test_region_listed_with_zero_count_is_not_selectable() {
        let mut data = dataset().clone();
        if let Some(region) = data.regions.iter_mut().find(|r| r.id == RegionId::Histiaiotis) {
            region.count = 0;
        }
        assert!(!data.has_data(RegionId::Histiaiotis));

        let mut state = SelectionState::default();
        assert_eq!(
            state.toggle_selected_region(&data, RegionId::Histiaiotis),
            SelectionChange::Ignored(RegionId::Histiaiotis)
        );
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_selection_replaces() {
        let mut state = SelectionState::default();
        state.toggle_selected_region(dataset(), RegionId::Pelasgiotis);
        let change = state.toggle_selected_region(dataset(), RegionId::Thessaliotis);
        assert_eq!(change, SelectionChange::Selected(RegionId::Thessaliotis));
        assert_eq!(state.selected, Some(RegionId::Thessaliotis));
    }

    #[test]
    fn test_hover_and_selection_are_independent() {
        let mut state = SelectionState::default();
        state.toggle_selected_region(dataset(), RegionId::Pelasgiotis);
        state.set_hovered_region(Some(RegionId::Histiaiotis));
        state.set_hovered_region(None);
        assert_eq!(state.selected, Some(RegionId::Pelasgiotis));

        state.toggle_selected_region(dataset(), RegionId::Pelasgiotis);
        state.set_hovered_region(Some(RegionId::Phthiotis));
        state.toggle_selected_region(dataset(), RegionId::General);
        assert_eq!(state.hovered, Some(RegionId::Phthiotis));
    }

    #[test]
    fn test_hover_wins_over_selection() {
        let mut state = SelectionState::default();
        state.toggle_selected_region(dataset(), RegionId::Pelasgiotis);
        assert_eq!(
            state.region_visual_state(RegionId::Pelasgiotis),
            VisualState::Selected
        );

        state.set_hovered_region(Some(RegionId::Pelasgiotis));
        assert_eq!(
            state.region_visual_state(RegionId::Pelasgiotis),
            VisualState::Hovered
        );
        assert_eq!(
            state.region_visual_state(RegionId::Histiaiotis),
            VisualState::Neutral
        );
    }

    #[test]
    fn test_set_same_tab_is_noop() {
        let mut state = SelectionState::new(Tab::Profile);
        assert!(!state.set_active_tab(Tab::Profile));
        assert!(state.set_active_tab(Tab::Vowels));
        assert_eq!(state.active_tab, Tab::Vowels);
    }
}
