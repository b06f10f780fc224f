use crate::handlers::HandlerContext;
use crate::presentation::presenters::{self, command};
use crate::presentation::view_models::ConfigInitOutcome;
use anyhow::Result;
use dodona_runtime::Config;
use std::path::Path;

pub fn show(path: &Path, config: &Config, ctx: &HandlerContext) -> Result<()> {
    ctx.render(command::config_result(presenters::present_config(
        path, config,
    )))
}

pub fn path(path: &Path, ctx: &HandlerContext) -> Result<()> {
    ctx.render(command::config_path_result(presenters::present_config_path(
        path,
    )))
}

/// Write the default config. An existing file is kept unless `force`.
pub fn init(path: &Path, force: bool, ctx: &HandlerContext) -> Result<()> {
    let outcome = match (path.exists(), force) {
        (true, false) => ConfigInitOutcome::Kept,
        (true, true) => ConfigInitOutcome::Overwritten,
        (false, _) => ConfigInitOutcome::Created,
    };

    if outcome != ConfigInitOutcome::Kept {
        Config::default().save_to(path)?;
        tracing::info!(path = %path.display(), "config written");
    }

    ctx.render(command::config_init_result(
        presenters::present_config_init(path, outcome),
    ))
}
