use owo_colors::Style;
use std::fmt;

use super::heading;
use crate::presentation::formatters::{number, text};
use crate::presentation::view_models::{
    DisplayOptions, InscriptionTableViewModel, VowelCategoryViewModel, VowelReportViewModel,
    ViewMode,
};

/// Citations listed per category before "and N more" in standard mode.
const CITATION_PREVIEW: usize = 3;

// --------------------------------------------------------
// Vowel Report View
// --------------------------------------------------------

pub struct VowelReportView<'a> {
    data: &'a VowelReportViewModel,
    options: DisplayOptions,
}

impl<'a> VowelReportView<'a> {
    pub fn new(data: &'a VowelReportViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn category_title(&self, c: &VowelCategoryViewModel) -> String {
        format!(
            "Category {} [{}] {}: {} ({})",
            c.number,
            c.badge,
            c.label,
            c.count,
            number::percent(c.percent_share)
        )
    }

    fn render_category(&self, f: &mut fmt::Formatter, c: &VowelCategoryViewModel) -> fmt::Result {
        let verbose = self.options.mode == ViewMode::Verbose;
        heading(f, &self.category_title(c), self.options)?;
        writeln!(f, "  {}", c.description)?;

        let shown = if verbose {
            c.citations.len()
        } else {
            c.citations.len().min(CITATION_PREVIEW)
        };
        for citation in &c.citations[..shown] {
            writeln!(f, "    {}", citation)?;
        }
        if shown < c.citations.len() {
            writeln!(
                f,
                "    {}",
                text::paint(
                    &format!("… and {} more", c.citations.len() - shown),
                    Style::new().bright_black(),
                    self.options.enable_color
                )
            )?;
        }
        Ok(())
    }

    fn render_commentary(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        heading(f, "Orthographic system", self.options)?;
        writeln!(
            f,
            "  {} {} {} {}",
            text::pad("Source", 14),
            text::pad("Archaic", 10),
            text::pad("Reformed", 10),
            "Attic"
        )?;
        for row in &self.data.orthography {
            writeln!(
                f,
                "  {} {} {} {}",
                text::pad(&row.etymon, 14),
                text::pad(&row.archaic, 10),
                text::pad(&row.reformed, 10),
                row.attic
            )?;
        }

        writeln!(f)?;
        heading(f, "Theories", self.options)?;
        for theory in &self.data.theories {
            writeln!(f, "  {}: {}", theory.author, theory.title)?;
            writeln!(f, "    {}", theory.summary)?;
        }

        writeln!(f)?;
        heading(f, "Conclusion", self.options)?;
        writeln!(f, "  {}", self.data.conclusion)
    }
}

impl<'a> fmt::Display for VowelReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.options.mode {
            ViewMode::Minimal => {
                for c in &self.data.categories {
                    writeln!(f, "{} {}", c.number, c.count)?;
                }
                Ok(())
            }
            ViewMode::Compact => {
                for c in &self.data.categories {
                    writeln!(f, "{}", self.category_title(c))?;
                }
                Ok(())
            }
            ViewMode::Standard | ViewMode::Verbose => {
                writeln!(
                    f,
                    "Vowel notation in {} reformed-alphabet inscriptions",
                    self.data.total
                )?;
                for c in &self.data.categories {
                    writeln!(f)?;
                    self.render_category(f, c)?;
                }
                if self.options.mode == ViewMode::Verbose {
                    self.render_commentary(f)?;
                }
                Ok(())
            }
        }
    }
}

// --------------------------------------------------------
// Inscription Table View
// --------------------------------------------------------

pub struct InscriptionTableView<'a> {
    data: &'a InscriptionTableViewModel,
    options: DisplayOptions,
}

impl<'a> InscriptionTableView<'a> {
    pub fn new(data: &'a InscriptionTableViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn badge_style(category: u8) -> Style {
        match category {
            1 => Style::new().green(),
            2 => Style::new().yellow(),
            _ => Style::new().magenta(),
        }
    }
}

impl<'a> fmt::Display for InscriptionTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.rows.is_empty() {
            return writeln!(f, "No inscriptions match the filter.");
        }

        match self.options.mode {
            ViewMode::Minimal => {
                for row in &self.data.rows {
                    writeln!(f, "{}", row.citation)?;
                }
                return Ok(());
            }
            ViewMode::Compact => {
                for row in &self.data.rows {
                    writeln!(
                        f,
                        "{} {} [{}] {}",
                        row.corpus, row.inscription_id, row.badge, row.region_label
                    )?;
                }
                return Ok(());
            }
            ViewMode::Standard | ViewMode::Verbose => {}
        }

        let forms_width = match self.options.mode {
            ViewMode::Verbose => usize::MAX,
            _ => 40,
        };
        writeln!(
            f,
            "{} {} {} {} Notable forms",
            text::pad("Reference", 22),
            text::pad("Cat.", 6),
            text::pad("Date", 12),
            text::pad("Region", 11),
        )?;
        for row in &self.data.rows {
            writeln!(
                f,
                "{} {} {} {} {}",
                text::pad(&row.citation, 22),
                text::paint(
                    &text::pad(&row.badge, 6),
                    Self::badge_style(row.category),
                    self.options.enable_color
                ),
                text::pad(&row.date, 12),
                text::pad(&row.region_label, 11),
                text::truncate(&row.notable_forms, forms_width)
            )?;
        }

        if self.data.rows.len() < self.data.total {
            writeln!(f)?;
            writeln!(
                f,
                "{} of {} inscriptions shown",
                self.data.rows.len(),
                self.data.total
            )?;
        }
        Ok(())
    }
}
