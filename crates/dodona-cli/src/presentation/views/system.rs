use owo_colors::Style;
use std::fmt;

use crate::presentation::formatters::text;
use crate::presentation::view_models::{
    ConfigInitOutcome, ConfigInitViewModel, ConfigPathViewModel, ConfigViewModel, DisplayOptions,
    ValidationViewModel, ViewMode,
};

// --------------------------------------------------------
// Validation View
// --------------------------------------------------------

pub struct ValidationView<'a> {
    data: &'a ValidationViewModel,
    options: DisplayOptions,
}

impl<'a> ValidationView<'a> {
    pub fn new(data: &'a ValidationViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for ValidationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;

        if self.options.mode == ViewMode::Minimal {
            for issue in &d.issues {
                writeln!(f, "{}", issue.kind)?;
            }
            return Ok(());
        }

        writeln!(
            f,
            "Checked {} regions, {} vowel categories, {} inscriptions",
            d.regions_checked, d.vowel_categories_checked, d.inscriptions_checked
        )?;
        for issue in &d.issues {
            writeln!(
                f,
                "  {} {}",
                text::paint(
                    &format!("[{}]", issue.kind),
                    Style::new().red(),
                    self.options.enable_color
                ),
                issue.message
            )?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Config View
// --------------------------------------------------------

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    options: DisplayOptions,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        let unset = "(unset)";

        if self.options.mode == ViewMode::Minimal {
            return writeln!(f, "{}", d.path);
        }

        let source = if d.file_exists {
            d.path.clone()
        } else {
            format!("{} (not found, showing defaults)", d.path)
        };
        writeln!(
            f,
            "# {}",
            text::paint(&source, Style::new().bright_black(), self.options.enable_color)
        )?;
        writeln!(f, "default_tab      = {}", d.default_tab)?;
        writeln!(f, "color            = {}", d.color)?;
        writeln!(
            f,
            "log_level        = {}",
            d.log_level.as_deref().unwrap_or(unset)
        )?;
        writeln!(
            f,
            "log_file         = {}",
            d.log_file.as_deref().unwrap_or(unset)
        )?;
        writeln!(f, "validate_on_load = {}", d.validate_on_load)?;
        writeln!(f, "mouse            = {}", d.mouse)
    }
}

// --------------------------------------------------------
// Config Path View
// --------------------------------------------------------

pub struct ConfigPathView<'a> {
    data: &'a ConfigPathViewModel,
}

impl<'a> ConfigPathView<'a> {
    pub fn new(data: &'a ConfigPathViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigPathView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.path)
    }
}

// --------------------------------------------------------
// Config Init View
// --------------------------------------------------------

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data.outcome {
            ConfigInitOutcome::Created => writeln!(f, "Wrote default config to {}", self.data.path),
            ConfigInitOutcome::Overwritten => {
                writeln!(f, "Replaced {} with the default config", self.data.path)
            }
            ConfigInitOutcome::Kept => writeln!(f, "Left existing {} untouched", self.data.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::ValidationIssueViewModel;

    #[test]
    fn test_validation_lists_issues() {
        let vm = ValidationViewModel {
            valid: false,
            regions_checked: 4,
            vowel_categories_checked: 3,
            inscriptions_checked: 19,
            issues: vec![ValidationIssueViewModel {
                kind: "certainty_mismatch".to_string(),
                message: "pelasgiotis: certainty counts sum to 10, expected 11".to_string(),
            }],
        };
        let out = ValidationView::new(&vm, DisplayOptions::default()).to_string();
        assert!(out.contains("[certainty_mismatch] pelasgiotis"));

        let minimal =
            ValidationView::new(&vm, DisplayOptions::new(ViewMode::Minimal, false)).to_string();
        assert_eq!(minimal, "certainty_mismatch\n");
    }

    #[test]
    fn test_config_marks_defaults() {
        let vm = ConfigViewModel {
            path: "/tmp/dodona/config.toml".to_string(),
            file_exists: false,
            default_tab: "map".to_string(),
            color: true,
            log_level: None,
            log_file: None,
            validate_on_load: true,
            mouse: true,
        };
        let out = ConfigView::new(&vm, DisplayOptions::default()).to_string();
        assert!(out.contains("not found, showing defaults"));
        assert!(out.contains("log_level        = (unset)"));
    }
}
