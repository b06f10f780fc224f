//! Command results: content ViewModels wrapped with a badge and the
//! follow-up commands worth suggesting.

use dodona_engine::InscriptionFilter;
use dodona_runtime::DerivedViews;
use dodona_types::{Dataset, RegionId, VowelCategory};

use super::{
    present_inscriptions, present_profile, present_region_detail, present_region_list,
    present_summary, present_vowel_report,
};
use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitOutcome, ConfigInitViewModel, ConfigPathViewModel,
    ConfigViewModel, Guidance, InscriptionTableViewModel, ProfileViewModel,
    RegionDetailViewModel, RegionListViewModel, StatusBadge, SummaryViewModel,
    ValidationViewModel, VowelReportViewModel,
};

pub fn summary_result(data: &Dataset) -> CommandResultViewModel<SummaryViewModel> {
    CommandResultViewModel::new(present_summary(data))
        .suggest("Open the interactive dashboard", cmd::DASHBOARD)
        .suggest("See the regional distribution", cmd::REGIONS)
        .suggest("Read the dialect profile", cmd::PROFILE)
}

pub fn regions_result(
    data: &Dataset,
    views: &impl DerivedViews,
) -> CommandResultViewModel<RegionListViewModel> {
    let content = present_region_list(data, views);
    let largest = content
        .regions
        .iter()
        .filter(|r| r.on_map)
        .max_by_key(|r| r.count)
        .map(|top| {
            Guidance::new(format!("Details for {}", top.name)).with_command(fmt::region(&top.id))
        });

    CommandResultViewModel::new(content).maybe_suggest(largest)
}

pub fn region_result(
    data: &Dataset,
    views: &impl DerivedViews,
    id: RegionId,
) -> CommandResultViewModel<RegionDetailViewModel> {
    let content = present_region_detail(data, views, id);

    if !content.has_data {
        let label = format!("{} has no inscriptions in this corpus", content.name);
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning(label))
            .suggest("List the regions with data", cmd::REGIONS);
    }

    let command = fmt::inscriptions_in_region(&content.id);
    CommandResultViewModel::new(content).suggest("Vowel evidence from this region", command)
}

pub fn profile_result(
    data: &Dataset,
    views: &impl DerivedViews,
) -> CommandResultViewModel<ProfileViewModel> {
    CommandResultViewModel::new(present_profile(data, views, None))
        .suggest("Vowel notation categories", cmd::VOWELS)
}

pub fn vowels_result(
    data: &Dataset,
    views: &impl DerivedViews,
    category: Option<VowelCategory>,
) -> CommandResultViewModel<VowelReportViewModel> {
    let result = CommandResultViewModel::new(present_vowel_report(data, views, category, None));

    match category {
        Some(c) => result.suggest(
            "All citations of this category",
            fmt::vowels_category(c.number()),
        ),
        None => result.suggest("Export the evidence table", cmd::INSCRIPTIONS_CSV),
    }
}

pub fn inscriptions_result(
    data: &Dataset,
    views: &impl DerivedViews,
    filter: &InscriptionFilter,
) -> CommandResultViewModel<InscriptionTableViewModel> {
    let content = present_inscriptions(data, views, filter);
    let empty = content.rows.is_empty();
    let result = CommandResultViewModel::new(content);

    if empty {
        result.with_badge(StatusBadge::info("No inscriptions match the filter"))
    } else {
        result.suggest("Export as CSV", cmd::INSCRIPTIONS_CSV)
    }
}

pub fn validation_result(content: ValidationViewModel) -> CommandResultViewModel<ValidationViewModel> {
    let badge = if content.valid {
        StatusBadge::success("Dataset is consistent")
    } else {
        StatusBadge::error(format!("{} issue(s) found", content.issues.len()))
    };
    CommandResultViewModel::new(content).with_badge(badge)
}

pub fn config_result(content: ConfigViewModel) -> CommandResultViewModel<ConfigViewModel> {
    let missing = !content.file_exists;
    CommandResultViewModel::new(content).maybe_suggest(
        missing.then(|| Guidance::new("Write a config file").with_command(cmd::CONFIG_INIT)),
    )
}

pub fn config_path_result(
    content: ConfigPathViewModel,
) -> CommandResultViewModel<ConfigPathViewModel> {
    CommandResultViewModel::new(content)
}

pub fn config_init_result(
    content: ConfigInitViewModel,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let result = match content.outcome {
        ConfigInitOutcome::Created | ConfigInitOutcome::Overwritten => {
            CommandResultViewModel::new(content).with_badge(StatusBadge::success("Config written"))
        }
        ConfigInitOutcome::Kept => CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("Config file already exists"))
            .suggest("Overwrite it", format!("{} --force", cmd::CONFIG_INIT)),
    };
    result.suggest("Review the settings", cmd::CONFIG_SHOW)
}
