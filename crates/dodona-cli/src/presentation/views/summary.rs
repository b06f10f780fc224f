use owo_colors::Style;
use std::fmt;

use crate::presentation::formatters::{number, text};
use crate::presentation::view_models::{DisplayOptions, SummaryViewModel, ViewMode};

pub struct SummaryView<'a> {
    data: &'a SummaryViewModel,
    options: DisplayOptions,
}

impl<'a> SummaryView<'a> {
    pub fn new(data: &'a SummaryViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        writeln!(f, "thessalian={}", d.thessalian)?;
        writeln!(f, "thessalian_unique={}", d.thessalian_unique)?;
        writeln!(f, "dialect_classified={}", d.dialect_classified)?;
        writeln!(f, "unassigned={}", d.unassigned)
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        writeln!(
            f,
            "{} Thessalian inscriptions ({} unique) · {} of {} dialect-classified · regions {}+1 · {}",
            d.thessalian,
            d.thessalian_unique,
            number::percent(d.thessalian_share_percent),
            d.dialect_classified,
            d.regions_with_data,
            d.span_label
        )
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        let value = |v: String| text::paint(&v, Style::new().bold(), self.options.enable_color);

        writeln!(f, "Thessalian dialect at Dodona")?;
        writeln!(
            f,
            "  Inscriptions      {} (with duplication) · {} unique",
            value(d.thessalian.to_string()),
            d.thessalian_unique
        )?;
        writeln!(
            f,
            "  Dialect share     {} of {} dialect-classified inscriptions",
            value(number::percent(d.thessalian_share_percent)),
            d.dialect_classified
        )?;
        writeln!(
            f,
            "  Regions           {}+1 (tétradas with data + without region, {})",
            value(d.regions_with_data.to_string()),
            number::sample(d.unassigned)
        )?;
        writeln!(f, "  Time span         {}", value(d.span_label.clone()))
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;
        let d = self.data;
        writeln!(f, "  Corpus            {} oracular tablets", d.corpus)?;
        writeln!(
            f,
            "  Vowel evidence    {} reformed-alphabet inscriptions",
            d.vowel_evidence
        )
    }
}

impl<'a> fmt::Display for SummaryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.options.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_summary;
    use dodona_core::dataset;

    #[test]
    fn test_compact_summary_line() {
        let vm = present_summary(dataset());
        let out = SummaryView::new(&vm, DisplayOptions::new(ViewMode::Compact, false)).to_string();
        assert_eq!(
            out,
            "81 Thessalian inscriptions (75 unique) · 10.0% of 806 dialect-classified · regions 3+1 · V–II BC\n"
        );
    }

    #[test]
    fn test_minimal_is_key_value() {
        let vm = present_summary(dataset());
        let out = SummaryView::new(&vm, DisplayOptions::new(ViewMode::Minimal, false)).to_string();
        assert!(out.lines().all(|l| l.contains('=')));
        assert!(out.contains("unassigned=57"));
    }
}
