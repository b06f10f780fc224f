use dodona_types::{Dataset, Region, RegionId, Tab};
use tracing::{debug, trace};

use crate::config::Config;
use crate::selection::{SelectionChange, SelectionState, VisualState};
use crate::views::EngineViews;
use crate::{Error, Result};

/// One dashboard session: the dataset plus the selection state.
///
/// All state changes go through `&mut self`, so the owner of the `Dashboard`
/// is the only writer.
#[derive(Debug, Clone)]
pub struct Dashboard {
    data: &'static Dataset,
    state: SelectionState,
}

impl Dashboard {
    pub fn new(data: &'static Dataset, initial_tab: Tab) -> Self {
        Self {
            data,
            state: SelectionState::new(initial_tab),
        }
    }

    /// Open a session over the compiled-in dataset, validating it first when
    /// `validate_on_load` is set.
    pub fn open(config: &Config) -> Result<Self> {
        let data = dodona_core::dataset();
        if config.validate_on_load {
            let report = dodona_core::validate(data);
            if !report.is_valid() {
                return Err(Error::InvalidDataset(report.issues));
            }
            debug!("dataset validated");
        }
        Ok(Self::new(data, config.default_tab))
    }

    pub fn data(&self) -> &'static Dataset {
        self.data
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn views(&self) -> EngineViews<'static> {
        EngineViews::new(self.data)
    }

    pub fn active_tab(&self) -> Tab {
        self.state.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Tab) -> bool {
        let changed = self.state.set_active_tab(tab);
        if changed {
            debug!(tab = %tab, "active tab changed");
        }
        changed
    }

    pub fn next_tab(&mut self) -> bool {
        self.set_active_tab(self.state.active_tab.next())
    }

    pub fn previous_tab(&mut self) -> bool {
        self.set_active_tab(self.state.active_tab.previous())
    }

    pub fn set_hovered_region(&mut self, region: Option<RegionId>) {
        if self.state.hovered != region {
            trace!(region = ?region, "hover changed");
        }
        self.state.set_hovered_region(region);
    }

    pub fn toggle_selected_region(&mut self, region: RegionId) -> SelectionChange {
        let change = self.state.toggle_selected_region(self.data, region);
        debug!(?change, "selection toggled");
        change
    }

    /// Toggle whatever region is under the hover cursor.
    pub fn toggle_hovered_region(&mut self) -> Option<SelectionChange> {
        let hovered = self.state.hovered?;
        Some(self.toggle_selected_region(hovered))
    }

    pub fn selected_region_detail(&self) -> Option<&'static Region> {
        self.state.selected.and_then(|id| self.data.region(id))
    }

    pub fn region_visual_state(&self, region: RegionId) -> VisualState {
        self.state.region_visual_state(region)
    }

    /// Move the hover cursor forward through the navigable regions,
    /// wrapping at the end. Starts at the first region when nothing is hovered.
    pub fn hover_next(&mut self) {
        self.step_hover(1);
    }

    pub fn hover_previous(&mut self) {
        self.step_hover(-1);
    }

    fn step_hover(&mut self, delta: isize) {
        let order = self.data.navigable_regions();
        if order.is_empty() {
            return;
        }
        let len = order.len() as isize;
        let next = match self
            .state
            .hovered
            .and_then(|h| order.iter().position(|id| *id == h))
        {
            Some(pos) => (pos as isize + delta).rem_euclid(len),
            None if delta >= 0 => 0,
            None => len - 1,
        };
        self.set_hovered_region(Some(order[next as usize]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        Dashboard::open(&Config::default()).unwrap()
    }

    #[test]
    fn test_open_validates_and_uses_default_tab() {
        let config = Config {
            default_tab: Tab::Profile,
            ..Config::default()
        };
        let dashboard = Dashboard::open(&config).unwrap();
        assert_eq!(dashboard.active_tab(), Tab::Profile);
        assert_eq!(dashboard.state().selected, None);
        assert_eq!(dashboard.state().hovered, None);
    }

    #[test]
    fn test_toggle_pelasgiotis_shows_detail() {
        let mut dashboard = dashboard();
        dashboard.toggle_selected_region(RegionId::Pelasgiotis);
        let detail = dashboard.selected_region_detail().unwrap();
        assert_eq!(detail.count, 11);
    }

    #[test]
    fn test_toggle_pelasgiotis_twice_clears() {
        let mut dashboard = dashboard();
        dashboard.toggle_selected_region(RegionId::Pelasgiotis);
        let change = dashboard.toggle_selected_region(RegionId::Pelasgiotis);
        assert_eq!(change, SelectionChange::Deselected(RegionId::Pelasgiotis));
        assert!(dashboard.selected_region_detail().is_none());
    }

    #[test]
    fn test_toggle_phthiotis_from_none() {
        let mut dashboard = dashboard();
        dashboard.toggle_selected_region(RegionId::Phthiotis);
        assert!(dashboard.selected_region_detail().is_none());
        assert_eq!(dashboard.state().selected, None);
    }

    #[test]
    fn test_hover_cursor_wraps() {
        let mut dashboard = dashboard();
        dashboard.hover_previous();
        assert_eq!(dashboard.state().hovered, Some(RegionId::General));
        dashboard.hover_next();
        assert_eq!(dashboard.state().hovered, Some(RegionId::Histiaiotis));
        dashboard.hover_next();
        assert_eq!(dashboard.state().hovered, Some(RegionId::Pelasgiotis));
    }

    #[test]
    fn test_toggle_hovered_region() {
        let mut dashboard = dashboard();
        assert_eq!(dashboard.toggle_hovered_region(), None);

        dashboard.hover_next();
        assert_eq!(
            dashboard.toggle_hovered_region(),
            Some(SelectionChange::Selected(RegionId::Histiaiotis))
        );
        assert_eq!(
            dashboard.region_visual_state(RegionId::Histiaiotis),
            VisualState::Hovered
        );
        dashboard.set_hovered_region(None);
        assert_eq!(
            dashboard.region_visual_state(RegionId::Histiaiotis),
            VisualState::Selected
        );
    }

    #[test]
    fn test_tab_cycling() {
        let mut dashboard = dashboard();
        assert!(dashboard.next_tab());
        assert_eq!(dashboard.active_tab(), Tab::Profile);
        assert!(dashboard.previous_tab());
        assert!(!dashboard.set_active_tab(Tab::Map));
    }
}
