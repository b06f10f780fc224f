//! Dashboard widgets
//!
//! Ratatui `Widget` wrappers around the screen ViewModels. Views take a
//! reference to their ViewModel and only map data to widgets; the layout
//! functions are shared with the renderer for mouse hit-testing.

pub mod charts;
pub mod header;
pub mod map;
pub mod profile;
pub mod regions;
pub mod screen;
pub mod status_bar;
pub mod vowels;

pub use screen::{DashboardScreenView, ScreenLayout, screen_layout};

use ratatui::style::{Color, Modifier, Style};

use crate::presentation::view_models::{RegionVisual, StatusLevel};

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// Hover wins over selection, both win over neutral.
pub(crate) fn visual_style(visual: RegionVisual) -> Style {
    match visual {
        RegionVisual::Hovered => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        RegionVisual::Selected => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        RegionVisual::Neutral => Style::default(),
    }
}

pub(crate) fn panel_title(title: &str) -> ratatui::text::Span<'static> {
    ratatui::text::Span::styled(
        format!(" {} ", title),
        Style::default().add_modifier(Modifier::BOLD),
    )
}
