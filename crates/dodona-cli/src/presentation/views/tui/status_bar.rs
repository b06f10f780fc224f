//! Status bar with the selection, the tooltip of the focused datum and the
//! key help, plus the sources footer.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::view_models::{FooterViewModel, StatusBarViewModel};

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(72), Constraint::Percentage(28)])
                .areas(inner);

        let dim = Style::default().fg(Color::DarkGray);
        let mut status = vec![Span::styled(self.model.message.as_str(), Style::default().fg(color))];
        if let Some(selected) = &self.model.selected {
            status.push(Span::styled(" | selected: ", dim));
            status.push(Span::raw(selected.as_str()));
        }

        let tooltip = match &self.model.tooltip {
            Some(tip) => {
                let mut spans = vec![Span::styled(
                    tip.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )];
                for row in &tip.rows {
                    spans.push(Span::styled(format!(" · {}: ", row.label), dim));
                    spans.push(Span::raw(row.value.as_str()));
                }
                if let Some(note) = &tip.note {
                    spans.push(Span::styled(
                        format!(" ({})", note),
                        Style::default().add_modifier(Modifier::ITALIC),
                    ));
                }
                Line::from(spans)
            }
            None => Line::raw(""),
        };

        Paragraph::new(vec![Line::from(status), tooltip]).render(left, buf);

        let key = Style::default().fg(Color::Yellow);
        let help = vec![
            Line::from(vec![
                Span::styled("[1-3/Tab]", key),
                Span::raw(" tab "),
                Span::styled("[←/→]", key),
                Span::raw(" move"),
            ]),
            Line::from(vec![
                Span::styled("[Enter]", key),
                Span::raw(" select "),
                Span::styled("[Esc]", key),
                Span::raw(" clear "),
                Span::styled("[q]", key),
                Span::raw("uit"),
            ]),
        ];
        Paragraph::new(help).render(right, buf);
    }
}

pub struct FooterView<'a> {
    model: &'a FooterViewModel,
}

impl<'a> FooterView<'a> {
    pub fn new(model: &'a FooterViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for FooterView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::styled(
            format!("{} · {}", self.model.sources, self.model.year),
            Style::default().fg(Color::DarkGray),
        ))
        .render(area, buf);
    }
}
