use dodona_types::Point;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Widget,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use super::charts::{BarsView, SharesView};
use super::regions::{RegionDetailView, RegionListView};
use super::{panel_title, visual_style};
use crate::presentation::formatters::number;
use crate::presentation::view_models::{MapDistrictViewModel, MapTabViewModel, RegionVisual};

// Map drawing space
const X_MIN: f64 = 10.0;
const X_MAX: f64 = 330.0;
const Y_MIN: f64 = 5.0;
const Y_MAX: f64 = 230.0;

/// Canvas y grows upwards; map y grows downwards.
fn flip(y: f64) -> f64 {
    Y_MAX + Y_MIN - y
}

/// The map point under a terminal cell of the canvas, if the cell is on it.
pub fn map_point(inner: Rect, column: u16, row: u16) -> Option<Point> {
    if inner.width == 0 || inner.height == 0 {
        return None;
    }
    if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
        return None;
    }
    let x = X_MIN + (f64::from(column - inner.x) + 0.5) / f64::from(inner.width) * (X_MAX - X_MIN);
    let y = Y_MIN + (f64::from(row - inner.y) + 0.5) / f64::from(inner.height) * (Y_MAX - Y_MIN);
    Some(Point::new(x, y))
}

pub struct MapTabLayout {
    pub map: Rect,
    pub distribution: Rect,
    pub regions: Rect,
    pub detail: Rect,
    pub dialects: Rect,
}

pub fn map_tab_layout(area: Rect) -> MapTabLayout {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);
    let [map, distribution] =
        Layout::vertical([Constraint::Min(12), Constraint::Length(6)]).areas(left);
    let [regions, detail, dialects] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(6),
        Constraint::Length(9),
    ])
    .areas(right);

    MapTabLayout {
        map,
        distribution,
        regions,
        detail,
        dialects,
    }
}

/// Drawing area of the map canvas inside its border.
pub fn map_inner(map: Rect) -> Rect {
    Block::bordered().inner(map)
}

fn outline_color(district: &MapDistrictViewModel) -> Color {
    match (district.visual, district.count) {
        (RegionVisual::Hovered, _) => Color::Cyan,
        (RegionVisual::Selected, _) => Color::Yellow,
        (RegionVisual::Neutral, Some(_)) => Color::Gray,
        (RegionVisual::Neutral, None) => Color::DarkGray,
    }
}

/// Stylized map of the tétradas.
pub struct MapView<'a> {
    model: &'a MapTabViewModel,
}

impl<'a> MapView<'a> {
    pub fn new(model: &'a MapTabViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for MapView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let model = self.model;

        Canvas::default()
            .block(Block::bordered().title(panel_title("Thessaly")))
            .marker(Marker::Braille)
            .x_bounds([X_MIN, X_MAX])
            .y_bounds([Y_MIN, Y_MAX])
            .paint(|ctx| {
                for district in &model.districts {
                    let color = outline_color(district);
                    let points = &district.outline;
                    for (i, &(x1, y1)) in points.iter().enumerate() {
                        let (x2, y2) = points[(i + 1) % points.len()];
                        ctx.draw(&CanvasLine {
                            x1,
                            y1: flip(y1),
                            x2,
                            y2: flip(y2),
                            color,
                        });
                    }
                }
                ctx.layer();

                for district in &model.districts {
                    let count = match district.count {
                        Some(count) => count.to_string(),
                        None => "no data".to_string(),
                    };
                    let style = match district.count {
                        Some(_) => visual_style(district.visual),
                        None => Style::default().fg(Color::DarkGray),
                    };
                    let (x, y) = district.label_at;
                    ctx.print(
                        x - 20.0,
                        flip(y),
                        Span::styled(format!("{} ({})", district.label, count), style),
                    );
                    let (cx, cy) = district.city_at;
                    ctx.print(
                        cx,
                        flip(cy),
                        Span::styled(
                            format!("• {}", district.city),
                            Style::default().fg(Color::Gray),
                        ),
                    );
                }

                for landmark in &model.landmarks {
                    let (x, y) = landmark.at;
                    ctx.print(
                        x,
                        flip(y),
                        Span::styled(
                            format!("▲ {}", landmark.name),
                            Style::default().fg(Color::Green),
                        ),
                    );
                }

                ctx.print(
                    X_MIN + 2.0,
                    flip(Y_MAX - 5.0),
                    Span::styled(
                        format!("{} without region", number::sample(model.unassigned)),
                        Style::default()
                            .fg(Color::Gray)
                            .add_modifier(Modifier::ITALIC),
                    ),
                );
            })
            .render(area, buf);
    }
}

/// Map tab: map and distribution on the left, region list, detail and
/// dialect context on the right.
pub struct MapTabView<'a> {
    model: &'a MapTabViewModel,
}

impl<'a> MapTabView<'a> {
    pub fn new(model: &'a MapTabViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for MapTabView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = map_tab_layout(area);

        MapView::new(self.model).render(layout.map, buf);
        SharesView::new("Regional distribution", &self.model.distribution)
            .render(layout.distribution, buf);
        RegionListView::new(&self.model.regions).render(layout.regions, buf);
        RegionDetailView::new(self.model.selected.as_ref()).render(layout.detail, buf);
        BarsView::new("Dialects of the corpus", &self.model.dialect_context)
            .render(layout.dialects, buf);
    }
}
