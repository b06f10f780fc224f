use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget, Wrap},
};

use super::charts::{BarsView, SharesView};
use super::panel_title;
use crate::presentation::view_models::ProfileViewModel;

pub struct ProfileTabView<'a> {
    model: &'a ProfileViewModel,
}

impl<'a> ProfileTabView<'a> {
    pub fn new(model: &'a ProfileViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ProfileTabView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let m = self.model;
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);
        let [certainty, chronology] =
            Layout::vertical([Constraint::Length(5), Constraint::Min(6)]).areas(left);
        let [themes_row, alphabets] =
            Layout::vertical([Constraint::Min(10), Constraint::Length(9)]).areas(right);
        let [themes, radar] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(themes_row);

        SharesView::new("Attribution certainty", &m.certainty.shares).render(certainty, buf);
        BarsView::new("Chronology (BC)", &m.chronology).render(chronology, buf);
        BarsView::new("Themes", &m.themes).render(themes, buf);

        let radar_lines: Vec<Line> = m
            .theme_radar
            .iter()
            .map(|b| Line::raw(format!("{:<16}{:>3}", b.label, b.value)))
            .collect();
        Paragraph::new(radar_lines)
            .block(Block::bordered().title(panel_title("Known topics")))
            .render(radar, buf);

        let block = Block::bordered().title(panel_title("Alphabet"));
        let inner = block.inner(alphabets);
        block.render(alphabets, buf);
        let [shares, note] = Layout::vertical([
            Constraint::Length(m.alphabets.len() as u16),
            Constraint::Min(1),
        ])
        .areas(inner);
        SharesView::new("", &m.alphabets).render_plain(shares, buf);
        Paragraph::new(Line::styled(
            m.alphabet_note.as_str(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ))
        .wrap(Wrap { trim: true })
        .render(note, buf);
    }
}
