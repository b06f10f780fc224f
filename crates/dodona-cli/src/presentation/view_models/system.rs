use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssueViewModel {
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationViewModel {
    pub valid: bool,
    pub regions_checked: usize,
    pub vowel_categories_checked: usize,
    pub inscriptions_checked: usize,
    pub issues: Vec<ValidationIssueViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    /// False when the values shown are the built-in defaults
    pub file_exists: bool,
    pub default_tab: String,
    pub color: bool,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
    pub validate_on_load: bool,
    pub mouse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigPathViewModel {
    pub path: String,
    pub exists: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigInitOutcome {
    Created,
    Overwritten,
    /// File exists and --force was not given
    Kept,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub outcome: ConfigInitOutcome,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ValidationViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ValidationView;
        Box::new(ValidationView::new(self, options))
    }
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ConfigView;
        Box::new(ConfigView::new(self, options))
    }
}

impl CreateView for ConfigPathViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ConfigPathView;
        Box::new(ConfigPathView::new(self))
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ConfigInitView;
        Box::new(ConfigInitView::new(self))
    }
}

// --------------------------------------------------------
// Display Trait (default rendering)
// --------------------------------------------------------

impl fmt::Display for ValidationViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(DisplayOptions::default()))
    }
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(DisplayOptions::default()))
    }
}

impl fmt::Display for ConfigPathViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(DisplayOptions::default()))
    }
}

impl fmt::Display for ConfigInitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(DisplayOptions::default()))
    }
}
