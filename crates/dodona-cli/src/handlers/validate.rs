use crate::handlers::HandlerContext;
use crate::presentation::presenters::{self, command};
use anyhow::Result;

/// Validates the compiled-in dataset and fails when issues are found.
pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let data = dodona_core::dataset();
    let report = dodona_core::validate(data);
    let valid = report.is_valid();

    for issue in &report.issues {
        tracing::warn!(kind = issue.kind(), "{}", issue);
    }

    ctx.render(command::validation_result(presenters::present_validation(
        data, &report,
    )))?;

    if !valid {
        anyhow::bail!("Dataset validation failed");
    }
    Ok(())
}
