use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs, Widget},
};

use super::panel_title;
use crate::presentation::formatters::number;
use crate::presentation::view_models::{SummaryViewModel, TabsViewModel};

pub struct HeaderView<'a> {
    model: &'a SummaryViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a SummaryViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let m = self.model;
        let value = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let sep = Span::styled(" │ ", Style::default().fg(Color::DarkGray));

        let line = Line::from(vec![
            Span::styled(m.thessalian.to_string(), value),
            Span::raw(format!(" inscriptions ({} unique)", m.thessalian_unique)),
            sep.clone(),
            Span::styled(number::percent(m.thessalian_share_percent), value),
            Span::raw(format!(" of {} dialect-classified", m.dialect_classified)),
            sep.clone(),
            Span::raw("regions "),
            Span::styled(format!("{}+1", m.regions_with_data), value),
            sep,
            Span::styled(m.span_label.as_str(), value),
        ]);

        Paragraph::new(line)
            .block(Block::bordered().title(panel_title("The Thessalian dialect at Dodona")))
            .render(area, buf);
    }
}

pub struct TabsView<'a> {
    model: &'a TabsViewModel,
}

impl<'a> TabsView<'a> {
    pub fn new(model: &'a TabsViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for TabsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = self
            .model
            .titles
            .iter()
            .enumerate()
            .map(|(i, t)| Line::from(format!("{} {}", i + 1, t)))
            .collect();

        Tabs::new(titles)
            .select(self.model.active)
            .block(Block::bordered())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .render(area, buf);
    }
}
