use crate::handlers::HandlerContext;
use crate::presentation::presenters::command;
use anyhow::Result;
use dodona_runtime::Dashboard;

pub fn handle(dashboard: &Dashboard, ctx: &HandlerContext) -> Result<()> {
    ctx.render(command::profile_result(dashboard.data(), &dashboard.views()))
}
