pub mod common;
pub mod profile;
pub mod region;
pub mod result;
pub mod screen;
pub mod summary;
pub mod system;
pub mod vowel;

use std::fmt;

pub use common::{
    BarViewModel, DisplayOptions, Guidance, ShareViewModel, StatViewModel, StatusBadge,
    StatusLevel, ViewMode,
};
pub use profile::ProfileViewModel;
pub use region::{
    CertaintyViewModel, RegionDetailViewModel, RegionListViewModel, RegionRowViewModel,
    RegionVisual,
};
pub use result::CommandResultViewModel;
pub use screen::{
    DashboardScreenViewModel, FooterViewModel, LandmarkViewModel, MapDistrictViewModel,
    MapTabViewModel, StatusBarViewModel, TabContentViewModel, TabsViewModel, TooltipRowViewModel,
    TooltipViewModel, VowelsTabViewModel,
};
pub use summary::SummaryViewModel;
pub use system::{
    ConfigInitOutcome, ConfigInitViewModel, ConfigPathViewModel, ConfigViewModel,
    ValidationIssueViewModel, ValidationViewModel,
};
pub use vowel::{
    InscriptionFilterSummary, InscriptionRowViewModel, InscriptionTableViewModel,
    OrthographyRowViewModel, TheoryViewModel, VowelCategoryViewModel, VowelReportViewModel,
};

/// Bridge from a ViewModel to the text view that lays it out.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
