use dodona_core::ValidationReport;
use dodona_runtime::Config;
use dodona_types::Dataset;
use std::path::Path;

use crate::presentation::view_models::{
    ConfigInitOutcome, ConfigInitViewModel, ConfigPathViewModel, ConfigViewModel,
    ValidationIssueViewModel, ValidationViewModel,
};

pub fn present_validation(data: &Dataset, report: &ValidationReport) -> ValidationViewModel {
    ValidationViewModel {
        valid: report.is_valid(),
        regions_checked: data.regions.len(),
        vowel_categories_checked: data.vowel_categories.len(),
        inscriptions_checked: data.inscriptions.len(),
        issues: report
            .issues
            .iter()
            .map(|issue| ValidationIssueViewModel {
                kind: issue.kind().to_string(),
                message: issue.to_string(),
            })
            .collect(),
    }
}

pub fn present_config(path: &Path, config: &Config) -> ConfigViewModel {
    ConfigViewModel {
        path: path.display().to_string(),
        file_exists: path.exists(),
        default_tab: config.default_tab.to_string(),
        color: config.color,
        log_level: config.log_level.clone(),
        log_file: config.log_file.as_ref().map(|p| p.display().to_string()),
        validate_on_load: config.validate_on_load,
        mouse: config.mouse,
    }
}

pub fn present_config_path(path: &Path) -> ConfigPathViewModel {
    ConfigPathViewModel {
        path: path.display().to_string(),
        exists: path.exists(),
    }
}

pub fn present_config_init(path: &Path, outcome: ConfigInitOutcome) -> ConfigInitViewModel {
    ConfigInitViewModel {
        path: path.display().to_string(),
        outcome,
    }
}
