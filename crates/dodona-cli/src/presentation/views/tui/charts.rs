use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Paragraph, Widget},
};

use super::panel_title;
use crate::presentation::formatters::number;
use crate::presentation::view_models::{BarViewModel, ShareViewModel};

fn bar_style(b: &BarViewModel) -> Style {
    let style = if b.highlighted {
        Style::default().fg(Color::Yellow)
    } else if b.dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };
    if b.focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// Horizontal bar chart; the focused bar is drawn reversed.
pub struct BarsView<'a> {
    title: &'a str,
    bars: &'a [BarViewModel],
}

impl<'a> BarsView<'a> {
    pub fn new(title: &'a str, bars: &'a [BarViewModel]) -> Self {
        Self { title, bars }
    }
}

impl<'a> Widget for BarsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bars: Vec<Bar> = self
            .bars
            .iter()
            .map(|b| {
                let style = bar_style(b);
                Bar::default()
                    .label(Line::from(b.label.as_str()))
                    .value(u64::from(b.value))
                    .style(style)
                    .value_style(style.add_modifier(Modifier::REVERSED))
            })
            .collect();

        BarChart::default()
            .block(Block::bordered().title(panel_title(self.title)))
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}

/// One line per slice: label, count, share and a proportional bar.
pub struct SharesView<'a> {
    title: &'a str,
    rows: &'a [ShareViewModel],
}

impl<'a> SharesView<'a> {
    pub fn new(title: &'a str, rows: &'a [ShareViewModel]) -> Self {
        Self { title, rows }
    }
}

impl<'a> SharesView<'a> {
    /// Draw the rows without a surrounding block.
    pub fn render_plain(self, area: Rect, buf: &mut Buffer) {
        let label_width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);
        let bar_room = (area.width as usize).saturating_sub(label_width + 14);

        let lines: Vec<Line> = self
            .rows
            .iter()
            .map(|r| {
                let filled = ((r.percent_share / 100.0) * bar_room as f64).round() as usize;
                Line::from(vec![
                    Span::raw(format!(
                        "{:<width$} {:>3} {:>6} ",
                        r.label,
                        r.value,
                        number::percent(r.percent_share),
                        width = label_width
                    )),
                    Span::styled("■".repeat(filled), Style::default().fg(Color::Cyan)),
                ])
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}

impl<'a> Widget for SharesView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(panel_title(self.title));
        let inner = block.inner(area);
        block.render(area, buf);
        self.render_plain(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_shares_view_prints_percent() {
        let rows = vec![ShareViewModel {
            label: "Certain".to_string(),
            value: 70,
            percent_share: 86.419_753,
        }];
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        SharesView::new("Certainty", &rows).render(area, &mut buf);
        let out = text(&buf);
        assert!(out.contains("Certain"));
        assert!(out.contains("86.4%"));
    }

    #[test]
    fn test_bars_view_draws_labels() {
        let bars = vec![
            BarViewModel {
                label: "Religion".to_string(),
                value: 17,
                highlighted: false,
                dimmed: false,
                focused: true,
            },
            BarViewModel {
                label: "Unknown".to_string(),
                value: 15,
                highlighted: false,
                dimmed: true,
                focused: false,
            },
        ];
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        BarsView::new("Themes", &bars).render(area, &mut buf);
        let out = text(&buf);
        assert!(out.contains("Religion"));
        assert!(out.contains("Themes"));
    }
}
