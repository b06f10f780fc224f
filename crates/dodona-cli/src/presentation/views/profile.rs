use owo_colors::Style;
use std::fmt;

use super::{bar_chart, heading, share_chart};
use crate::presentation::formatters::{number, text};
use crate::presentation::view_models::{BarViewModel, DisplayOptions, ProfileViewModel, ViewMode};

pub struct ProfileView<'a> {
    data: &'a ProfileViewModel,
    options: DisplayOptions,
}

impl<'a> ProfileView<'a> {
    pub fn new(data: &'a ProfileViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sections: [(&str, &[BarViewModel]); 3] = [
            ("chronology", &self.data.chronology),
            ("theme", &self.data.themes),
            ("dialect", &self.data.dialect_context),
        ];
        for (section, bars) in sections {
            for b in bars {
                writeln!(f, "{}\t{}\t{}", section, b.label, b.value)?;
            }
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let joined = |bars: &[BarViewModel]| {
            bars.iter()
                .map(|b| format!("{} {}", b.label, b.value))
                .collect::<Vec<_>>()
                .join(" · ")
        };
        let c = &self.data.certainty;
        writeln!(
            f,
            "Certainty: {} certain · {} uncertain · {} name only",
            c.certain, c.uncertain, c.name_only
        )?;
        writeln!(f, "Chronology: {}", joined(&self.data.chronology))?;
        writeln!(f, "Themes: {}", joined(&self.data.themes))?;
        writeln!(
            f,
            "Alphabets: {}",
            self.data
                .alphabets
                .iter()
                .map(|a| format!("{} {}", a.label, a.value))
                .collect::<Vec<_>>()
                .join(" · ")
        )
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = &self.data.certainty;
        heading(
            f,
            &format!("Attribution certainty ({})", number::sample(c.total)),
            self.options,
        )?;
        share_chart(f, &c.shares, self.options)?;

        writeln!(f)?;
        heading(f, "Chronology (BC)", self.options)?;
        bar_chart(f, &self.data.chronology, self.options)?;

        writeln!(f)?;
        heading(f, "Consultation themes", self.options)?;
        bar_chart(f, &self.data.themes, self.options)?;

        writeln!(f)?;
        heading(f, "Alphabet", self.options)?;
        share_chart(f, &self.data.alphabets, self.options)?;
        writeln!(
            f,
            "  {}",
            text::paint(
                &self.data.alphabet_note,
                Style::new().italic(),
                self.options.enable_color
            )
        )
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;

        writeln!(f)?;
        heading(f, "Themes with a known topic", self.options)?;
        let total: u32 = self.data.theme_radar.iter().map(|b| b.value).sum();
        for b in &self.data.theme_radar {
            writeln!(
                f,
                "  {} {:>3} {:>6}",
                text::pad(&b.label, 16),
                b.value,
                number::percent(dodona_engine::percent(b.value, total))
            )?;
        }

        writeln!(f)?;
        heading(f, "Dialects of the classified corpus", self.options)?;
        bar_chart(f, &self.data.dialect_context, self.options)
    }
}

impl<'a> fmt::Display for ProfileView<'a> {
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
    use crate::presentation::presenters::present_profile;
    use dodona_core::dataset;
    use dodona_runtime::EngineViews;

    fn render(mode: ViewMode) -> String {
        let vm = present_profile(dataset(), &EngineViews::new(dataset()), None);
        ProfileView::new(&vm, DisplayOptions::new(mode, false)).to_string()
    }

    #[test]
    fn test_compact_certainty_line() {
        let out = render(ViewMode::Compact);
        assert!(out.starts_with("Certainty: "));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn test_verbose_adds_known_topics_and_dialects() {
        let standard = render(ViewMode::Standard);
        let verbose = render(ViewMode::Verbose);
        assert!(!standard.contains("Themes with a known topic"));
        assert!(verbose.contains("Themes with a known topic"));
        assert!(verbose.contains("Thessalian"));
    }

    #[test]
    fn test_minimal_is_tab_separated() {
        let out = render(ViewMode::Minimal);
        assert!(out.lines().all(|l| l.split('\t').count() == 3));
        assert!(out.contains("theme\tUnknown\t15"));
    }
}
