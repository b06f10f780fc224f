use owo_colors::Style;
use std::fmt;

use super::{heading, share_chart};
use crate::presentation::formatters::{number, text};
use crate::presentation::view_models::{
    DisplayOptions, RegionDetailViewModel, RegionListViewModel, RegionRowViewModel, ShareViewModel,
    ViewMode,
};

// --------------------------------------------------------
// Region List View
// --------------------------------------------------------

pub struct RegionListView<'a> {
    data: &'a RegionListViewModel,
    options: DisplayOptions,
}

impl<'a> RegionListView<'a> {
    pub fn new(data: &'a RegionListViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for region in &self.data.regions {
            writeln!(f, "{} {}", region.id, region.count)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for region in &self.data.regions {
            writeln!(
                f,
                "{} {:>3}  {} {}",
                text::pad(&region.name, 16),
                region.count,
                region.short_name,
                number::whole_percent(region.percent_share)
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        heading(
            f,
            &format!(
                "Regional distribution ({})",
                number::sample(self.data.total)
            ),
            self.options,
        )?;
        let rows: Vec<ShareViewModel> = self
            .data
            .regions
            .iter()
            .map(|r| ShareViewModel {
                label: r.name.clone(),
                value: r.count,
                percent_share: r.percent_share,
            })
            .collect();
        share_chart(f, &rows, self.options)?;

        writeln!(f)?;
        heading(
            f,
            &format!(
                "Attribution certainty ({})",
                number::sample(self.data.certainty.total)
            ),
            self.options,
        )?;
        share_chart(f, &self.data.certainty.shares, self.options)
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;
        writeln!(f)?;
        heading(f, "Regions", self.options)?;
        for region in &self.data.regions {
            writeln!(f, "  {}", region_line(region))?;
        }
        Ok(())
    }
}

fn region_line(region: &RegionRowViewModel) -> String {
    let placement = if region.on_map {
        "on map"
    } else {
        "not on map"
    };
    format!(
        "{} ({}, {}) · id {} · {}",
        region.name, region.english_name, region.short_name, region.id, placement
    )
}

impl<'a> fmt::Display for RegionListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.options.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Region Detail View
// --------------------------------------------------------

pub struct RegionDetailView<'a> {
    data: &'a RegionDetailViewModel,
    options: DisplayOptions,
}

impl<'a> RegionDetailView<'a> {
    pub fn new(data: &'a RegionDetailViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn title(&self) -> String {
        let d = self.data;
        let mut title = format!("{} ({})", d.name, d.english_name);
        if let Some(city) = &d.city {
            title.push_str(&format!(" · {}", city));
        }
        title
    }
}

impl<'a> fmt::Display for RegionDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;

        match self.options.mode {
            ViewMode::Minimal => return writeln!(f, "{} {}", d.id, d.total),
            ViewMode::Compact => {
                return writeln!(
                    f,
                    "{}: {} ({})",
                    d.name,
                    d.total,
                    number::percent(d.percent_share)
                );
            }
            ViewMode::Standard | ViewMode::Verbose => {}
        }

        heading(f, &self.title(), self.options)?;
        if !d.has_data {
            return writeln!(
                f,
                "  {}",
                text::paint(
                    "No inscriptions of this corpus are attributed to this district.",
                    Style::new().bright_black(),
                    self.options.enable_color
                )
            );
        }

        writeln!(
            f,
            "  {} of the regional attributions",
            number::percent(d.percent_share)
        )?;
        for stat in &d.counts {
            writeln!(f, "  {} {:>3}", text::pad(&stat.label, 18), stat.value)?;
        }
        writeln!(f)?;
        writeln!(f, "  Chronology")?;
        for stat in &d.chronology {
            writeln!(f, "    {} {:>3}", text::pad(&stat.label, 16), stat.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::{present_region_detail, present_region_list};
    use dodona_core::dataset;
    use dodona_runtime::EngineViews;
    use dodona_types::RegionId;

    #[test]
    fn test_minimal_lists_ids_in_map_order() {
        let vm = present_region_list(dataset(), &EngineViews::new(dataset()));
        let out = RegionListView::new(&vm, DisplayOptions::new(ViewMode::Minimal, false)).to_string();
        let ids: Vec<&str> = out.lines().filter_map(|l| l.split(' ').next()).collect();
        assert_eq!(ids.first(), Some(&"histiaiotis"));
        assert_eq!(ids.last(), Some(&"general"));
        assert!(out.contains("general 57"));
    }

    #[test]
    fn test_detail_of_data_less_district_explains() {
        let vm = present_region_detail(dataset(), &EngineViews::new(dataset()), RegionId::Phthiotis);
        let out = RegionDetailView::new(&vm, DisplayOptions::default()).to_string();
        assert!(out.contains("No inscriptions"));
        assert!(!out.contains("Chronology"));
    }

    #[test]
    fn test_detail_lists_counts_and_chronology() {
        let vm =
            present_region_detail(dataset(), &EngineViews::new(dataset()), RegionId::Pelasgiotis);
        let out = RegionDetailView::new(&vm, DisplayOptions::default()).to_string();
        assert!(out.starts_with("Pelasgiótide (Pelasgiotis) · Larissa"));
        assert!(out.contains("Total"));
        assert!(out.contains("V BC"));
        assert!(!out.contains("Name only"));
    }
}
