use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// Headline figures shown above every tab and by `dodona summary`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryViewModel {
    /// Regional attributions, counting duplicates
    pub thessalian: u32,
    pub thessalian_unique: u32,
    pub dialect_classified: u32,
    /// Thessalian share of the dialect-classified inscriptions
    pub thessalian_share_percent: f64,
    pub corpus: u32,
    /// Map districts with data
    pub regions_with_data: usize,
    /// Inscriptions without a regional attribution
    pub unassigned: u32,
    pub vowel_evidence: u32,
    pub span_label: String,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for SummaryViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::summary::SummaryView;
        Box::new(SummaryView::new(self, options))
    }
}

// --------------------------------------------------------
// Display Trait (default rendering)
// --------------------------------------------------------

impl fmt::Display for SummaryViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(DisplayOptions::default()))
    }
}
