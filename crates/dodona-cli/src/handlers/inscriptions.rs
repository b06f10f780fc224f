use crate::args::ExportFormat;
use crate::handlers::HandlerContext;
use crate::presentation::presenters::{self, command};
use crate::presentation::view_models::InscriptionRowViewModel;
use anyhow::Result;
use dodona_engine::InscriptionFilter;
use dodona_runtime::Dashboard;
use dodona_types::{RegionId, VowelCategory};
use std::io;

pub fn handle(
    dashboard: &Dashboard,
    category: Option<VowelCategory>,
    region: Option<RegionId>,
    export: Option<ExportFormat>,
    ctx: &HandlerContext,
) -> Result<()> {
    let filter = InscriptionFilter { category, region };

    match export {
        Some(ExportFormat::Csv) => {
            let table =
                presenters::present_inscriptions(dashboard.data(), &dashboard.views(), &filter);
            tracing::debug!(rows = table.rows.len(), "exporting inscriptions as csv");
            write_csv(io::stdout().lock(), &table.rows)
        }
        None => ctx.render(command::inscriptions_result(
            dashboard.data(),
            &dashboard.views(),
            &filter,
        )),
    }
}

pub fn write_csv<W: io::Write>(writer: W, rows: &[InscriptionRowViewModel]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "corpus",
        "inscription_id",
        "citation",
        "category",
        "date",
        "region",
        "region_uncertain",
        "notable_forms",
    ])?;

    for row in rows {
        wtr.write_record([
            row.corpus.as_str(),
            row.inscription_id.as_str(),
            row.citation.as_str(),
            &row.category.to_string(),
            row.date.as_str(),
            row.region.as_deref().unwrap_or(""),
            if row.region_uncertain { "true" } else { "false" },
            row.notable_forms.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
