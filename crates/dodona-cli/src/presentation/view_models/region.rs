use serde::Serialize;
use std::fmt;

use super::common::{ShareViewModel, StatViewModel};
use super::{CreateView, DisplayOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionVisual {
    Hovered,
    Selected,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionRowViewModel {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub english_name: String,
    pub count: u32,
    pub percent_share: f64,
    /// Drawn as a district on the map
    pub on_map: bool,
    pub visual: RegionVisual,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertaintyViewModel {
    pub certain: u32,
    pub uncertain: u32,
    pub name_only: u32,
    pub total: u32,
    pub shares: Vec<ShareViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionListViewModel {
    pub total: u32,
    pub regions: Vec<RegionRowViewModel>,
    pub certainty: CertaintyViewModel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionDetailViewModel {
    pub id: String,
    pub name: String,
    pub english_name: String,
    /// Modern city shown on the map, for districts
    pub city: Option<String>,
    pub has_data: bool,
    pub total: u32,
    pub percent_share: f64,
    pub counts: Vec<StatViewModel>,
    pub chronology: Vec<StatViewModel>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for RegionListViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::region::RegionListView;
        Box::new(RegionListView::new(self, options))
    }
}

impl CreateView for RegionDetailViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::region::RegionDetailView;
        Box::new(RegionDetailView::new(self, options))
    }
}

// --------------------------------------------------------
// Display Trait (default rendering)
// --------------------------------------------------------

impl fmt::Display for RegionListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(DisplayOptions::default()))
    }
}

impl fmt::Display for RegionDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(DisplayOptions::default()))
    }
}
