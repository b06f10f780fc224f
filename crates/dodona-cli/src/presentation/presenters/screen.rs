use dodona_engine::{ChartDatum, InscriptionFilter, Tooltip, tooltip};
use dodona_runtime::{DerivedViews, SelectionState};
use dodona_types::{Dataset, Point, RegionId, Tab};

use super::region::{present_region_detail, region_rows, visual};
use super::{bars, present_profile, present_summary, present_vowel_report, share_rows};
use crate::presentation::presenters::vowel::present_inscriptions;
use crate::presentation::view_models::{
    DashboardScreenViewModel, FooterViewModel, LandmarkViewModel, MapDistrictViewModel,
    MapTabViewModel, StatusBarViewModel, StatusLevel, TabContentViewModel, TabsViewModel,
    TooltipRowViewModel, TooltipViewModel, VowelsTabViewModel,
};

pub const SOURCES: &str = "Data: Dakaris, Vokotopoulou & Christidis, Τα χρηστήρια ελάσματα της \
                           Δωδώνης (DVC) · Vowel system after Scarborough (2014)";

/// Number of positions the chart cursor can take on a tab.
pub fn chart_len(data: &Dataset, tab: Tab) -> usize {
    match tab {
        Tab::Map => 0,
        Tab::Profile => data.chronology.len() + data.themes.len(),
        Tab::Vowels => data.vowel_categories.len(),
    }
}

/// Build the whole screen for one draw. Only the active tab's views are
/// requested from `views`.
pub fn present_screen(
    data: &Dataset,
    state: &SelectionState,
    views: &impl DerivedViews,
    chart_cursor: usize,
    year: i32,
) -> DashboardScreenViewModel {
    let len = chart_len(data, state.active_tab);
    let cursor = (len > 0).then(|| chart_cursor % len);

    let (content, datum) = match state.active_tab {
        Tab::Map => {
            let (map, datum) = present_map(data, state, views);
            (TabContentViewModel::Map(Box::new(map)), datum)
        }
        Tab::Profile => {
            let profile = present_profile(data, views, cursor);
            let datum = profile
                .chronology
                .iter()
                .find(|b| b.focused)
                .map(|b| ChartDatum::Chronology {
                    period_label: b.label.clone(),
                    value: b.value,
                })
                .or_else(|| {
                    profile.themes.iter().find(|b| b.focused).map(|b| ChartDatum::Theme {
                        theme_name: b.label.clone(),
                        value: b.value,
                        unknown: b.dimmed,
                    })
                });
            (TabContentViewModel::Profile(Box::new(profile)), datum)
        }
        Tab::Vowels => {
            let report = present_vowel_report(data, views, None, cursor);
            let datum = report
                .categories
                .iter()
                .find(|c| c.focused)
                .and_then(|c| {
                    let category = c.number.try_into().ok()?;
                    Some(ChartDatum::Vowel {
                        category,
                        label: c.label.clone(),
                        value: c.count,
                        percent_share: c.percent_share,
                    })
                });
            let inscriptions = present_inscriptions(data, views, &InscriptionFilter::default());
            (
                TabContentViewModel::Vowels(Box::new(VowelsTabViewModel {
                    report,
                    inscriptions,
                })),
                datum,
            )
        }
    };

    DashboardScreenViewModel {
        header: present_summary(data),
        tabs: TabsViewModel {
            titles: Tab::ALL.iter().map(|t| t.title().to_string()).collect(),
            active: state.active_tab.index(),
        },
        content,
        status_bar: present_status_bar(data, state, datum.as_ref().map(tooltip)),
        footer: FooterViewModel {
            sources: SOURCES.to_string(),
            year,
        },
    }
}

fn point(p: Point) -> (f64, f64) {
    (p.x, p.y)
}

fn present_map(
    data: &Dataset,
    state: &SelectionState,
    views: &impl DerivedViews,
) -> (MapTabViewModel, Option<ChartDatum>) {
    let distribution = views.region_distribution();

    let districts = data
        .districts
        .iter()
        .map(|d| MapDistrictViewModel {
            id: d.id.to_string(),
            label: d.label.to_string(),
            english_name: d.english_name.to_string(),
            city: d.city.to_string(),
            outline: d.outline.iter().copied().map(point).collect(),
            label_at: point(d.label_at),
            city_at: point(d.city_at),
            count: data.region(d.id).map(|r| r.count),
            visual: visual(state.region_visual_state(d.id)),
        })
        .collect();

    let datum = state.hovered.and_then(|id| {
        distribution
            .iter()
            .find(|r| r.id == id)
            .map(|r| ChartDatum::Region {
                id: r.id,
                label: r.display_name.to_string(),
                value: r.value,
                percent_share: r.percent_share,
            })
    });

    let map = MapTabViewModel {
        districts,
        landmarks: data
            .landmarks
            .iter()
            .map(|l| LandmarkViewModel {
                name: l.name.to_string(),
                at: point(l.at),
            })
            .collect(),
        unassigned: data.region(RegionId::General).map_or(0, |r| r.count),
        regions: region_rows(data, &distribution, state),
        selected: state
            .selected
            .map(|id| present_region_detail(data, views, id)),
        distribution: share_rows(
            distribution
                .iter()
                .map(|r| dodona_engine::Share {
                    label: r.label.to_string(),
                    value: r.value,
                    percent_share: r.percent_share,
                })
                .collect(),
        ),
        dialect_context: bars(views.dialect_context(), None),
    };

    (map, datum)
}

fn region_name(data: &Dataset, id: RegionId) -> String {
    data.region(id)
        .map(|r| r.display_name.to_string())
        .or_else(|| data.district(id).map(|d| d.label.to_string()))
        .unwrap_or_else(|| id.to_string())
}

fn present_status_bar(
    data: &Dataset,
    state: &SelectionState,
    tip: Option<Tooltip>,
) -> StatusBarViewModel {
    let (message, level) = match (state.hovered, state.selected) {
        (Some(id), _) if !data.has_data(id) => (
            format!("{} does not appear in the corpus", region_name(data, id)),
            StatusLevel::Warning,
        ),
        (Some(hovered), Some(selected)) if hovered != selected => (
            format!(
                "{} selected · Enter to select {}",
                region_name(data, selected),
                region_name(data, hovered)
            ),
            StatusLevel::Success,
        ),
        (_, Some(id)) => (
            format!("{} selected · Enter to deselect", region_name(data, id)),
            StatusLevel::Success,
        ),
        (Some(_), None) => (
            "Enter or click to show the region detail".to_string(),
            StatusLevel::Info,
        ),
        (None, None) => (
            "←/→ to move · Enter to select · 1/2/3 to switch tabs".to_string(),
            StatusLevel::Info,
        ),
    };

    StatusBarViewModel {
        hovered: state.hovered.map(|id| region_name(data, id)),
        selected: state.selected.map(|id| region_name(data, id)),
        tooltip: tip.map(|t| TooltipViewModel {
            title: t.title,
            rows: t
                .rows
                .into_iter()
                .map(|r| TooltipRowViewModel {
                    label: r.label,
                    value: r.value,
                })
                .collect(),
            note: t.note,
        }),
        message,
        level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dodona_core::dataset;
    use dodona_engine::{
        CertaintySplit, Citation, RegionDetail, RegionShare, SeriesPoint, Share,
        VowelCategoryView,
    };
    use dodona_runtime::EngineViews;
    use dodona_types::{InscriptionExample, VowelCategory};
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// Counts how often each derived view is requested.
    struct CountingViews<'a> {
        inner: EngineViews<'a>,
        calls: RefCell<BTreeMap<&'static str, usize>>,
    }

    impl<'a> CountingViews<'a> {
        fn new() -> Self {
            Self {
                inner: EngineViews::new(dataset()),
                calls: RefCell::new(BTreeMap::new()),
            }
        }

        fn hit(&self, name: &'static str) {
            *self.calls.borrow_mut().entry(name).or_default() += 1;
        }

        fn requested(&self) -> Vec<&'static str> {
            self.calls.borrow().keys().copied().collect()
        }
    }

    impl DerivedViews for CountingViews<'_> {
        fn region_distribution(&self) -> Vec<RegionShare> {
            self.hit("region_distribution");
            self.inner.region_distribution()
        }
        fn certainty_split(&self) -> CertaintySplit {
            self.hit("certainty_split");
            self.inner.certainty_split()
        }
        fn region_detail(&self, id: RegionId) -> Option<RegionDetail> {
            self.hit("region_detail");
            self.inner.region_detail(id)
        }
        fn chronology_series(&self) -> Vec<SeriesPoint> {
            self.hit("chronology_series");
            self.inner.chronology_series()
        }
        fn theme_series(&self) -> Vec<SeriesPoint> {
            self.hit("theme_series");
            self.inner.theme_series()
        }
        fn theme_radar(&self) -> Vec<SeriesPoint> {
            self.hit("theme_radar");
            self.inner.theme_radar()
        }
        fn dialect_context(&self) -> Vec<SeriesPoint> {
            self.hit("dialect_context");
            self.inner.dialect_context()
        }
        fn alphabet_breakdown(&self) -> Vec<Share> {
            self.hit("alphabet_breakdown");
            self.inner.alphabet_breakdown()
        }
        fn vowel_breakdown(&self) -> Vec<VowelCategoryView> {
            self.hit("vowel_breakdown");
            self.inner.vowel_breakdown()
        }
        fn category_citations(&self, category: VowelCategory) -> Vec<Citation> {
            self.hit("category_citations");
            self.inner.category_citations(category)
        }
        fn inscriptions(&self, filter: &InscriptionFilter) -> Vec<InscriptionExample> {
            self.hit("inscriptions");
            self.inner.inscriptions(filter)
        }
    }

    #[test]
    fn test_vowels_tab_requests_only_vowel_views() {
        let views = CountingViews::new();
        let mut state = SelectionState::default();
        state.set_active_tab(Tab::Vowels);

        let screen = present_screen(dataset(), &state, &views, 0, 2026);

        assert!(matches!(screen.content, TabContentViewModel::Vowels(_)));
        assert_eq!(
            views.requested(),
            vec!["category_citations", "inscriptions", "vowel_breakdown"]
        );
    }

    #[test]
    fn test_profile_tab_skips_map_views() {
        let views = CountingViews::new();
        let state = SelectionState::new(Tab::Profile);

        present_screen(dataset(), &state, &views, 0, 2026);

        let requested = views.requested();
        assert!(!requested.contains(&"region_distribution"));
        assert!(!requested.contains(&"vowel_breakdown"));
        assert!(requested.contains(&"chronology_series"));
    }

    #[test]
    fn test_map_tab_shows_selected_detail() {
        let views = EngineViews::new(dataset());
        let mut state = SelectionState::default();
        state.toggle_selected_region(dataset(), RegionId::Pelasgiotis);

        let screen = present_screen(dataset(), &state, &views, 0, 2026);
        let TabContentViewModel::Map(map) = screen.content else {
            panic!("expected the map tab");
        };
        assert_eq!(map.selected.as_ref().map(|d| d.total), Some(11));
        assert_eq!(map.unassigned, 57);
        assert_eq!(map.districts.len(), 4);
        assert_eq!(
            map.districts.iter().find(|d| d.id == "phthiotis").and_then(|d| d.count),
            None
        );
        assert_eq!(screen.status_bar.level, StatusLevel::Success);
    }

    #[test]
    fn test_hovering_data_less_district_warns() {
        let views = EngineViews::new(dataset());
        let mut state = SelectionState::default();
        state.set_hovered_region(Some(RegionId::Phthiotis));

        let screen = present_screen(dataset(), &state, &views, 0, 2026);
        assert_eq!(screen.status_bar.level, StatusLevel::Warning);
        assert!(screen.status_bar.tooltip.is_none());
    }

    #[test]
    fn test_hovering_other_region_offers_to_select_it() {
        let views = EngineViews::new(dataset());
        let mut state = SelectionState::default();
        state.toggle_selected_region(dataset(), RegionId::Pelasgiotis);
        state.set_hovered_region(Some(RegionId::Histiaiotis));

        let screen = present_screen(dataset(), &state, &views, 0, 2026);
        let message = &screen.status_bar.message;
        assert!(!message.contains("deselect"), "{}", message);
        assert!(message.contains("Enter to select"), "{}", message);

        // Enter toggles the hovered region, which replaces the selection
        state.toggle_selected_region(dataset(), RegionId::Histiaiotis);
        assert_eq!(state.selected, Some(RegionId::Histiaiotis));
    }

    #[test]
    fn test_hovering_selected_region_offers_to_deselect_it() {
        let views = EngineViews::new(dataset());
        let mut state = SelectionState::default();
        state.toggle_selected_region(dataset(), RegionId::Pelasgiotis);
        state.set_hovered_region(Some(RegionId::Pelasgiotis));

        let screen = present_screen(dataset(), &state, &views, 0, 2026);
        assert!(screen.status_bar.message.contains("Enter to deselect"));
    }

    #[test]
    fn test_chart_cursor_wraps_and_feeds_tooltip() {
        let views = EngineViews::new(dataset());
        let state = SelectionState::new(Tab::Vowels);
        let len = chart_len(dataset(), Tab::Vowels);

        let screen = present_screen(dataset(), &state, &views, len + 1, 2026);
        let tip = screen.status_bar.tooltip.unwrap();
        assert!(tip.title.starts_with("Category 2"));
        assert_eq!(screen.footer.year, 2026);
    }
}
