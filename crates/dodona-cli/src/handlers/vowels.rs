use crate::handlers::HandlerContext;
use crate::presentation::presenters::command;
use anyhow::Result;
use dodona_runtime::Dashboard;
use dodona_types::VowelCategory;

pub fn handle(
    dashboard: &Dashboard,
    category: Option<VowelCategory>,
    ctx: &HandlerContext,
) -> Result<()> {
    ctx.render(command::vowels_result(
        dashboard.data(),
        &dashboard.views(),
        category,
    ))
}
