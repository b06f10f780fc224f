use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;
use std::fmt::Write;

use super::traits::Renderer;
use crate::presentation::formatters::text;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, DisplayOptions};

pub struct ConsoleRenderer {
    json_mode: bool,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, options: DisplayOptions) -> Self {
        Self { json_mode, options }
    }

    /// Text or JSON for a result, without printing it.
    pub fn format<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }

        let color = self.options.enable_color;
        let mut out = String::new();

        if let Some(badge) = &result.badge {
            writeln!(
                out,
                "{} {}",
                badge.icon(),
                text::paint(&badge.label, Style::new().bold(), color)
            )?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.options))?;

        if !result.suggestions.is_empty() {
            writeln!(
                out,
                "\n{}",
                text::paint("💡 Tips:", Style::new().yellow().bold(), color)
            )?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        print!("{}", self.format(&result)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_summary;
    use crate::presentation::view_models::{Guidance, StatusBadge, ViewMode};
    use dodona_core::dataset;

    fn result() -> CommandResultViewModel<crate::presentation::view_models::SummaryViewModel> {
        CommandResultViewModel::new(present_summary(dataset()))
            .with_badge(StatusBadge::info("Corpus summary"))
            .with_suggestion(Guidance::new("Open the dashboard").with_command("dodona dashboard"))
    }

    #[test]
    fn test_text_has_badge_content_and_tips() {
        let renderer = ConsoleRenderer::new(false, DisplayOptions::new(ViewMode::Compact, false));
        let out = renderer.format(&result()).unwrap();
        assert!(out.starts_with("ℹ️ Corpus summary\n\n81 Thessalian inscriptions"));
        assert!(out.contains("💡 Tips:"));
        assert!(out.contains("  • Open the dashboard: dodona dashboard"));
    }

    #[test]
    fn test_json_is_full_envelope() {
        let renderer = ConsoleRenderer::new(true, DisplayOptions::new(ViewMode::Minimal, false));
        let out = renderer.format(&result()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["badge"]["level"], "info");
        assert_eq!(json["content"]["thessalian"], 81);
        assert_eq!(json["suggestions"][0]["command"], "dodona dashboard");
    }
}
