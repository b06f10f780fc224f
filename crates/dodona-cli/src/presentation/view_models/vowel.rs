use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VowelCategoryViewModel {
    pub number: u8,
    pub badge: String,
    pub label: String,
    pub description: String,
    pub color_token: String,
    pub count: u32,
    pub percent_share: f64,
    /// "I. Dodone <corpus> <id>", in listing order
    pub citations: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrthographyRowViewModel {
    pub etymon: String,
    pub archaic: String,
    pub reformed: String,
    pub attic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TheoryViewModel {
    pub author: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VowelReportViewModel {
    /// Inscriptions with identifiable vowel notation
    pub total: u32,
    pub categories: Vec<VowelCategoryViewModel>,
    pub orthography: Vec<OrthographyRowViewModel>,
    pub theories: Vec<TheoryViewModel>,
    pub conclusion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InscriptionRowViewModel {
    pub citation: String,
    pub corpus: String,
    pub inscription_id: String,
    pub category: u8,
    pub badge: String,
    pub date: String,
    /// Region id, when the author's origin is attributed
    pub region: Option<String>,
    /// Short region name as printed in the table ("—" when unattributed)
    pub region_label: String,
    pub region_uncertain: bool,
    pub notable_forms: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InscriptionFilterSummary {
    pub category: Option<u8>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InscriptionTableViewModel {
    pub filter: InscriptionFilterSummary,
    /// Rows before filtering
    pub total: usize,
    pub rows: Vec<InscriptionRowViewModel>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for VowelReportViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::vowel::VowelReportView;
        Box::new(VowelReportView::new(self, options))
    }
}

impl CreateView for InscriptionTableViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::vowel::InscriptionTableView;
        Box::new(InscriptionTableView::new(self, options))
    }
}

// --------------------------------------------------------
// Display Trait (default rendering)
// --------------------------------------------------------

impl fmt::Display for VowelReportViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(DisplayOptions::default()))
    }
}

impl fmt::Display for InscriptionTableViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(DisplayOptions::default()))
    }
}
