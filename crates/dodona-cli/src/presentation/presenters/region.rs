use dodona_engine::{CertaintySplit, RegionShare};
use dodona_runtime::{DerivedViews, SelectionState, VisualState};
use dodona_types::{Dataset, RegionId};

use super::share_rows;
use crate::presentation::view_models::{
    CertaintyViewModel, RegionDetailViewModel, RegionListViewModel, RegionRowViewModel,
    RegionVisual, StatViewModel,
};

pub(crate) fn visual(state: VisualState) -> RegionVisual {
    match state {
        VisualState::Hovered => RegionVisual::Hovered,
        VisualState::Selected => RegionVisual::Selected,
        VisualState::Neutral => RegionVisual::Neutral,
    }
}

pub fn present_certainty(split: CertaintySplit) -> CertaintyViewModel {
    CertaintyViewModel {
        certain: split.certain,
        uncertain: split.uncertain,
        name_only: split.name_only,
        total: split.total(),
        shares: share_rows(split.shares()),
    }
}

/// Region rows in map navigation order, decorated with the session's
/// hover/selection state.
pub(crate) fn region_rows(
    data: &Dataset,
    distribution: &[RegionShare],
    state: &SelectionState,
) -> Vec<RegionRowViewModel> {
    data.navigable_regions()
        .into_iter()
        .filter_map(|id| distribution.iter().find(|r| r.id == id))
        .map(|r| RegionRowViewModel {
            id: r.id.to_string(),
            name: r.display_name.to_string(),
            short_name: r.label.to_string(),
            english_name: r.english_name.to_string(),
            count: r.value,
            percent_share: r.percent_share,
            on_map: data.district(r.id).is_some(),
            visual: visual(state.region_visual_state(r.id)),
        })
        .collect()
}

pub fn present_region_list(data: &Dataset, views: &impl DerivedViews) -> RegionListViewModel {
    let distribution = views.region_distribution();
    let certainty = present_certainty(views.certainty_split());

    RegionListViewModel {
        total: distribution.iter().map(|r| r.value).sum(),
        regions: region_rows(data, &distribution, &SelectionState::default()),
        certainty,
    }
}

/// Detail for any region id; a district absent from the corpus yields an
/// empty detail with `has_data = false`.
pub fn present_region_detail(
    data: &Dataset,
    views: &impl DerivedViews,
    id: RegionId,
) -> RegionDetailViewModel {
    let district = data.district(id);
    let city = district.map(|d| d.city.to_string());

    let Some(detail) = views.region_detail(id) else {
        let (name, english_name) = district
            .map(|d| (d.label.to_string(), d.english_name.to_string()))
            .unwrap_or_else(|| (id.to_string(), id.to_string()));
        return RegionDetailViewModel {
            id: id.to_string(),
            name,
            english_name,
            city,
            has_data: false,
            total: 0,
            percent_share: 0.0,
            counts: Vec::new(),
            chronology: Vec::new(),
        };
    };

    let percent_share = views
        .region_distribution()
        .iter()
        .find(|r| r.id == id)
        .map_or(0.0, |r| r.percent_share);
    let stats = |stats: Vec<dodona_engine::RegionStat>| {
        stats
            .into_iter()
            .map(|s| StatViewModel {
                label: s.label.to_string(),
                value: s.value,
            })
            .collect()
    };

    RegionDetailViewModel {
        id: id.to_string(),
        name: detail.display_name.to_string(),
        english_name: detail.english_name.to_string(),
        city,
        has_data: true,
        total: detail.total,
        percent_share,
        counts: stats(detail.counts),
        chronology: stats(detail.chronology),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dodona_core::dataset;
    use dodona_runtime::EngineViews;

    #[test]
    fn test_region_list_in_map_order() {
        let views = EngineViews::new(dataset());
        let list = present_region_list(dataset(), &views);
        let ids: Vec<&str> = list.regions.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["histiaiotis", "pelasgiotis", "thessaliotis", "general"]
        );
        assert_eq!(list.total, 81);
        assert_eq!(list.certainty.total, 81);
        assert!(!list.regions[3].on_map);
    }

    #[test]
    fn test_detail_of_data_less_district() {
        let views = EngineViews::new(dataset());
        let detail = present_region_detail(dataset(), &views, RegionId::Phthiotis);
        assert!(!detail.has_data);
        assert_eq!(detail.name, "Ftiótide");
        assert_eq!(detail.city.as_deref(), Some("Lamia"));
    }

    #[test]
    fn test_detail_snapshot() {
        let views = EngineViews::new(dataset());
        let detail = present_region_detail(dataset(), &views, RegionId::Thessaliotis);
        insta::assert_json_snapshot!(detail, {
            ".percent_share" => "[share]",
        }, @r###"
        {
          "id": "thessaliotis",
          "name": "Tesaliótide",
          "english_name": "Thessaliotis",
          "city": "Pharsalos",
          "has_data": true,
          "total": 5,
          "percent_share": "[share]",
          "counts": [
            {
              "label": "Total",
              "value": 5
            }
          ],
          "chronology": [
            {
              "label": "V BC",
              "value": 1
            },
            {
              "label": "Transition V–IV",
              "value": 4
            }
          ]
        }
        "###);
    }
}
