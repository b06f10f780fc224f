use crate::presentation::renderers::TuiRenderer;
use anyhow::Result;
use dodona_runtime::{Config, Dashboard};

pub fn handle(dashboard: Dashboard, config: &Config) -> Result<()> {
    TuiRenderer::new(dashboard, config.mouse).run()
}
