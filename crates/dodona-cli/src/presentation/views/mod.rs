pub mod profile;
pub mod region;
pub mod summary;
pub mod system;
pub mod tui;
pub mod vowel;

pub use profile::ProfileView;
pub use region::{RegionDetailView, RegionListView};
pub use summary::SummaryView;
pub use system::{ConfigInitView, ConfigPathView, ConfigView, ValidationView};
pub use vowel::{InscriptionTableView, VowelReportView};

use owo_colors::Style;
use std::fmt;

use crate::presentation::formatters::{bar, number, text};
use crate::presentation::view_models::{BarViewModel, DisplayOptions, ShareViewModel};

/// Section heading shared by the text views.
pub(crate) fn heading(f: &mut fmt::Formatter, title: &str, options: DisplayOptions) -> fmt::Result {
    writeln!(
        f,
        "{}",
        text::paint(title, Style::new().bold().underline(), options.enable_color)
    )
}

/// Label column, bar, value and share for each slice.
pub(crate) fn share_chart(
    f: &mut fmt::Formatter,
    rows: &[ShareViewModel],
    options: DisplayOptions,
) -> fmt::Result {
    let label_width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    let width = bar::bar_width(label_width);
    let max = rows.iter().map(|r| r.value).max().unwrap_or(0);

    for row in rows {
        writeln!(
            f,
            "  {} {} {:>3} {:>6}",
            text::pad(&row.label, label_width),
            text::paint(
                &text::pad(&bar::bar(row.value, max, width), width),
                Style::new().cyan(),
                options.enable_color
            ),
            row.value,
            number::percent(row.percent_share)
        )?;
    }
    Ok(())
}

/// Bar chart of categorical counts. Highlighted bars are bold, dimmed bars
/// are grey.
pub(crate) fn bar_chart(
    f: &mut fmt::Formatter,
    bars: &[BarViewModel],
    options: DisplayOptions,
) -> fmt::Result {
    let label_width = bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
    let width = bar::bar_width(label_width);
    let max = bars.iter().map(|b| b.value).max().unwrap_or(0);

    for b in bars {
        let style = if b.highlighted {
            Style::new().yellow().bold()
        } else if b.dimmed {
            Style::new().bright_black()
        } else {
            Style::new().cyan()
        };
        writeln!(
            f,
            "  {} {} {:>3}",
            text::pad(&b.label, label_width),
            text::paint(
                &text::pad(&bar::bar(b.value, max, width), width),
                style,
                options.enable_color
            ),
            b.value
        )?;
    }
    Ok(())
}
