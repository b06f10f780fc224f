use serde::Serialize;
use std::fmt;

use super::common::{BarViewModel, ShareViewModel};
use super::region::CertaintyViewModel;
use super::{CreateView, DisplayOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileViewModel {
    pub certainty: CertaintyViewModel,
    pub chronology: Vec<BarViewModel>,
    pub themes: Vec<BarViewModel>,
    /// Themes with a determinable topic
    pub theme_radar: Vec<BarViewModel>,
    pub alphabets: Vec<ShareViewModel>,
    pub alphabet_note: String,
    pub dialect_context: Vec<BarViewModel>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ProfileViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::profile::ProfileView;
        Box::new(ProfileView::new(self, options))
    }
}

// --------------------------------------------------------
// Display Trait (default rendering)
// --------------------------------------------------------

impl fmt::Display for ProfileViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(DisplayOptions::default()))
    }
}
