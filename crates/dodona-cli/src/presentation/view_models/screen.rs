//! Screen ViewModels for the interactive dashboard.
//!
//! One `DashboardScreenViewModel` is built per draw. Only the active tab's
//! content is present.

use serde::Serialize;

use super::common::{BarViewModel, ShareViewModel, StatusLevel};
use super::profile::ProfileViewModel;
use super::region::{RegionDetailViewModel, RegionRowViewModel, RegionVisual};
use super::summary::SummaryViewModel;
use super::vowel::{InscriptionTableViewModel, VowelReportViewModel};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardScreenViewModel {
    pub header: SummaryViewModel,
    pub tabs: TabsViewModel,
    pub content: TabContentViewModel,
    pub status_bar: StatusBarViewModel,
    pub footer: FooterViewModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabsViewModel {
    pub titles: Vec<String>,
    pub active: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", rename_all = "lowercase")]
pub enum TabContentViewModel {
    Map(Box<MapTabViewModel>),
    Profile(Box<ProfileViewModel>),
    Vowels(Box<VowelsTabViewModel>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDistrictViewModel {
    pub id: String,
    pub label: String,
    pub english_name: String,
    pub city: String,
    /// Outline in map coordinates (y grows downwards)
    pub outline: Vec<(f64, f64)>,
    pub label_at: (f64, f64),
    pub city_at: (f64, f64),
    /// `None` for districts absent from the corpus
    pub count: Option<u32>,
    pub visual: RegionVisual,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandmarkViewModel {
    pub name: String,
    pub at: (f64, f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapTabViewModel {
    pub districts: Vec<MapDistrictViewModel>,
    pub landmarks: Vec<LandmarkViewModel>,
    /// Inscriptions without a regional attribution ("n = 57")
    pub unassigned: u32,
    pub regions: Vec<RegionRowViewModel>,
    pub selected: Option<RegionDetailViewModel>,
    pub distribution: Vec<ShareViewModel>,
    pub dialect_context: Vec<BarViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VowelsTabViewModel {
    pub report: VowelReportViewModel,
    pub inscriptions: InscriptionTableViewModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipRowViewModel {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipViewModel {
    pub title: String,
    pub rows: Vec<TooltipRowViewModel>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBarViewModel {
    pub hovered: Option<String>,
    pub selected: Option<String>,
    pub tooltip: Option<TooltipViewModel>,
    pub message: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterViewModel {
    pub sources: String,
    pub year: i32,
}
