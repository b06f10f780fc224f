use crate::handlers::HandlerContext;
use crate::presentation::presenters::command;
use anyhow::Result;
use dodona_runtime::Dashboard;
use dodona_types::RegionId;

/// A region without data is reported, not treated as an error.
pub fn handle(dashboard: &Dashboard, id: RegionId, ctx: &HandlerContext) -> Result<()> {
    if !dashboard.data().has_data(id) {
        tracing::info!(region = %id, "region has no inscriptions");
    }
    ctx.render(command::region_result(dashboard.data(), &dashboard.views(), id))
}
