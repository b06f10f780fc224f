use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use super::{panel_title, visual_style};
use crate::presentation::formatters::number;
use crate::presentation::view_models::{RegionDetailViewModel, RegionRowViewModel, RegionVisual};

pub struct RegionListView<'a> {
    rows: &'a [RegionRowViewModel],
}

impl<'a> RegionListView<'a> {
    pub fn new(rows: &'a [RegionRowViewModel]) -> Self {
        Self { rows }
    }
}

impl<'a> Widget for RegionListView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .rows
            .iter()
            .map(|r| {
                let marker = match r.visual {
                    RegionVisual::Hovered => "▶ ",
                    RegionVisual::Selected => "● ",
                    RegionVisual::Neutral => "  ",
                };
                let name = if r.on_map {
                    r.name.clone()
                } else {
                    format!("{} (not on map)", r.name)
                };
                Line::from(vec![
                    Span::styled(marker, visual_style(r.visual)),
                    Span::styled(format!("{:<26}", name), visual_style(r.visual)),
                    Span::raw(format!(
                        "{:>3} {:>6}",
                        r.count,
                        number::percent(r.percent_share)
                    )),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(Block::bordered().title(panel_title("Regions")))
            .render(area, buf);
    }
}

/// Detail of the selected region, or a hint when nothing is selected.
pub struct RegionDetailView<'a> {
    model: Option<&'a RegionDetailViewModel>,
}

impl<'a> RegionDetailView<'a> {
    pub fn new(model: Option<&'a RegionDetailViewModel>) -> Self {
        Self { model }
    }
}

impl<'a> Widget for RegionDetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(panel_title("Region detail"));
        let dim = Style::default().fg(Color::DarkGray);

        let Some(d) = self.model else {
            Paragraph::new(Line::styled(
                "Move with ←/→ or the mouse, Enter or click to select a region.",
                dim,
            ))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
            return;
        };

        let mut title = format!("{} ({})", d.name, d.english_name);
        if let Some(city) = &d.city {
            title.push_str(&format!(" · {}", city));
        }
        let mut lines = vec![Line::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )];

        if d.has_data {
            lines.push(Line::raw(format!(
                "{} of the regional attributions",
                number::percent(d.percent_share)
            )));
            for stat in d.counts.iter().chain(&d.chronology) {
                lines.push(Line::raw(format!("  {:<18}{:>3}", stat.label, stat.value)));
            }
        } else {
            lines.push(Line::styled("No inscriptions in this corpus.", dim));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
