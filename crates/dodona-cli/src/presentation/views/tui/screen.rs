use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use super::header::{HeaderView, TabsView};
use super::map::MapTabView;
use super::profile::ProfileTabView;
use super::status_bar::{FooterView, StatusBarView};
use super::vowels::VowelsTabView;
use crate::presentation::view_models::{DashboardScreenViewModel, TabContentViewModel};

pub struct ScreenLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub content: Rect,
    pub status_bar: Rect,
    pub footer: Rect,
}

/// Screen areas. The renderer uses the same split to hit-test the mouse.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [header, tabs, content, status_bar, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenLayout {
        header,
        tabs,
        content,
        status_bar,
        footer,
    }
}

pub struct DashboardScreenView<'a> {
    model: &'a DashboardScreenViewModel,
}

impl<'a> DashboardScreenView<'a> {
    pub fn new(model: &'a DashboardScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for DashboardScreenView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = screen_layout(area);
        let m = self.model;

        HeaderView::new(&m.header).render(layout.header, buf);
        TabsView::new(&m.tabs).render(layout.tabs, buf);
        match &m.content {
            TabContentViewModel::Map(map) => MapTabView::new(map).render(layout.content, buf),
            TabContentViewModel::Profile(profile) => {
                ProfileTabView::new(profile).render(layout.content, buf)
            }
            TabContentViewModel::Vowels(vowels) => {
                VowelsTabView::new(vowels).render(layout.content, buf)
            }
        }
        StatusBarView::new(&m.status_bar).render(layout.status_bar, buf);
        FooterView::new(&m.footer).render(layout.footer, buf);
    }
}
