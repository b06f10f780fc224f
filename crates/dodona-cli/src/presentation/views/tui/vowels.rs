use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, Paragraph, Row, Table, Widget, Wrap},
};

use super::panel_title;
use crate::presentation::formatters::number;
use crate::presentation::view_models::{
    InscriptionTableViewModel, VowelCategoryViewModel, VowelReportViewModel, VowelsTabViewModel,
};

fn category_color(c: &VowelCategoryViewModel) -> Color {
    c.color_token.parse().unwrap_or(Color::White)
}

fn badge_color(category: u8) -> Color {
    match category {
        1 => Color::Green,
        2 => Color::Yellow,
        _ => Color::Red,
    }
}

struct CategoryCard<'a> {
    model: &'a VowelCategoryViewModel,
}

impl<'a> Widget for CategoryCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let c = self.model;
        let color = category_color(c);
        let mut block = Block::bordered()
            .title(panel_title(&format!("Category {}", c.number)))
            .border_style(Style::default().fg(color));
        if c.focused {
            block = block.border_type(BorderType::Thick);
        }

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    c.count.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" ({})  ", number::percent(c.percent_share))),
                Span::styled(c.label.as_str(), Style::default().fg(color)),
            ]),
            Line::styled(c.description.as_str(), Style::default().fg(Color::Gray)),
        ];
        lines.extend(
            c.citations
                .iter()
                .map(|citation| Line::raw(format!("· {}", citation))),
        );

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

pub struct InscriptionTableView<'a> {
    model: &'a InscriptionTableViewModel,
}

impl<'a> InscriptionTableView<'a> {
    pub fn new(model: &'a InscriptionTableViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for InscriptionTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["Reference", "Cat.", "Date", "Region", "Notable forms"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = self
            .model
            .rows
            .iter()
            .map(|r| {
                Row::new(vec![
                    Cell::from(format!("{} {}", r.corpus, r.inscription_id)),
                    Cell::from(Span::styled(
                        r.badge.as_str(),
                        Style::default().fg(badge_color(r.category)),
                    )),
                    Cell::from(r.date.as_str()),
                    Cell::from(r.region_label.as_str()),
                    Cell::from(r.notable_forms.as_str()),
                ])
            })
            .collect();

        let title = format!("Inscriptions ({})", self.model.rows.len());
        Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(6),
                Constraint::Length(11),
                Constraint::Length(10),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(Block::bordered().title(panel_title(&title)))
        .render(area, buf);
    }
}

struct CommentaryView<'a> {
    model: &'a VowelReportViewModel,
}

impl<'a> Widget for CommentaryView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![Line::styled("Source      Archaic  Reformed  Attic", bold)];
        lines.extend(self.model.orthography.iter().map(|r| {
            Line::raw(format!(
                "{:<12}{:<9}{:<10}{}",
                r.etymon, r.archaic, r.reformed, r.attic
            ))
        }));
        lines.push(Line::raw(""));
        for theory in &self.model.theories {
            lines.push(Line::styled(
                format!("{}: {}", theory.author, theory.title),
                bold,
            ));
            lines.push(Line::raw(theory.summary.as_str()));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            self.model.conclusion.as_str(),
            Style::default().fg(Color::Gray),
        ));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(panel_title("Orthography and theories")))
            .render(area, buf);
    }
}

/// Vowels tab: one card per category above the evidence table and the
/// commentary.
pub struct VowelsTabView<'a> {
    model: &'a VowelsTabViewModel,
}

impl<'a> VowelsTabView<'a> {
    pub fn new(model: &'a VowelsTabViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for VowelsTabView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let report = &self.model.report;
        let [cards, bottom] =
            Layout::vertical([Constraint::Length(9), Constraint::Min(6)]).areas(area);
        let [table, commentary] =
            Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                .areas(bottom);

        let card_areas = Layout::horizontal(
            report
                .categories
                .iter()
                .map(|_| Constraint::Ratio(1, report.categories.len().max(1) as u32)),
        )
        .split(cards);
        for (model, card) in report.categories.iter().zip(card_areas.iter()) {
            CategoryCard { model }.render(*card, buf);
        }

        InscriptionTableView::new(&self.model.inscriptions).render(table, buf);
        CommentaryView { model: report }.render(commentary, buf);
    }
}
