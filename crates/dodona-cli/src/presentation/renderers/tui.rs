//! Dashboard renderer
//!
//! Owns the `Dashboard` (the only writer of the selection state) and runs
//! the terminal event loop:
//! - every draw rebuilds the screen ViewModel for the active tab
//! - key and mouse events are applied synchronously before the next draw
//! - the terminal is restored on exit and on Ctrl-C

use std::io;
use std::time::Duration;

use anyhow::Result;
use chrono::Datelike;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dodona_engine::district_at;
use dodona_runtime::Dashboard;
use dodona_types::{RegionId, Tab};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::info;

use crate::presentation::presenters::{chart_len, present_screen};
use crate::presentation::view_models::DashboardScreenViewModel;
use crate::presentation::views::tui::map::{map_inner, map_point, map_tab_layout};
use crate::presentation::views::tui::{DashboardScreenView, screen_layout};

pub struct TuiRenderer {
    dashboard: Dashboard,

    /// UI State: position in the active tab's charts
    chart_cursor: usize,

    /// UI State: terminal area of the last draw, for mouse hit-testing
    last_area: Rect,

    mouse: bool,
    year: i32,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(dashboard: Dashboard, mouse: bool) -> Self {
        Self {
            dashboard,
            chart_cursor: 0,
            last_area: Rect::default(),
            mouse,
            year: chrono::Local::now().year(),
            should_quit: false,
        }
    }

    pub fn run(mut self) -> Result<()> {
        let mouse = self.mouse;
        ctrlc::set_handler(move || {
            let _ = restore_terminal(mouse);
            std::process::exit(130);
        })?;

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if self.mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        info!(tab = %self.dashboard.active_tab(), "dashboard started");

        let result = self.event_loop(&mut terminal);

        restore_terminal(self.mouse)?;
        terminal.show_cursor()?;
        info!("dashboard closed");

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(250))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Mouse(mouse) if self.mouse => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    pub fn screen(&self) -> DashboardScreenViewModel {
        present_screen(
            self.dashboard.data(),
            self.dashboard.state(),
            &self.dashboard.views(),
            self.chart_cursor,
            self.year,
        )
    }

    fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let screen = self.screen();
        f.render_widget(DashboardScreenView::new(&screen), f.area());
    }

    fn switch_tab(&mut self, changed: bool) {
        if changed {
            self.chart_cursor = 0;
        }
    }

    fn move_cursor(&mut self, forward: bool) {
        if self.dashboard.active_tab() == Tab::Map {
            if forward {
                self.dashboard.hover_next();
            } else {
                self.dashboard.hover_previous();
            }
            return;
        }

        let len = chart_len(self.dashboard.data(), self.dashboard.active_tab());
        if len == 0 {
            return;
        }
        self.chart_cursor = if forward {
            (self.chart_cursor + 1) % len
        } else {
            (self.chart_cursor + len - 1) % len
        };
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='3') => {
                let index = (c as usize) - ('1' as usize);
                let changed = self.dashboard.set_active_tab(Tab::ALL[index]);
                self.switch_tab(changed);
            }
            KeyCode::Tab => {
                let changed = self.dashboard.next_tab();
                self.switch_tab(changed);
            }
            KeyCode::BackTab => {
                let changed = self.dashboard.previous_tab();
                self.switch_tab(changed);
            }
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(true),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(false),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dashboard.toggle_hovered_region();
            }
            KeyCode::Esc => self.dashboard.set_hovered_region(None),
            _ => {}
        }
    }

    /// District under a terminal cell, when the map is on screen. Cells off
    /// the map canvas have no district.
    fn district_under(&self, column: u16, row: u16) -> Option<Option<RegionId>> {
        if self.dashboard.active_tab() != Tab::Map {
            return None;
        }
        let content = screen_layout(self.last_area).content;
        let inner = map_inner(map_tab_layout(content).map);
        Some(
            map_point(inner, column, row)
                .and_then(|point| district_at(&self.dashboard.data().districts, point)),
        )
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let Some(district) = self.district_under(mouse.column, mouse.row) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved => self.dashboard.set_hovered_region(district),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(id) = district {
                    self.dashboard.toggle_selected_region(id);
                }
            }
            _ => {}
        }
    }
}

fn restore_terminal(mouse: bool) -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse {
        execute!(stdout, DisableMouseCapture)?;
    }
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use dodona_core::dataset;
    use ratatui::{backend::TestBackend, buffer::Buffer};

    fn renderer(tab: Tab) -> TuiRenderer {
        TuiRenderer::new(Dashboard::new(dataset(), tab), true)
    }

    fn press(renderer: &mut TuiRenderer, code: KeyCode) {
        renderer.handle_key_event(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
    }

    fn draw(renderer: &mut TuiRenderer) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 44)).unwrap();
        terminal.draw(|f| renderer.render(f)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buf: &Buffer) -> String {
        let width = buf.area.width as usize;
        buf.content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Terminal cell over a map point, using the last drawn layout.
    fn cell_over(renderer: &TuiRenderer, x: f64, y: f64) -> (u16, u16) {
        let content = screen_layout(renderer.last_area).content;
        let inner = map_inner(map_tab_layout(content).map);
        let column = inner.x + ((x - 10.0) / 320.0 * f64::from(inner.width)) as u16;
        let row = inner.y + ((y - 5.0) / 225.0 * f64::from(inner.height)) as u16;
        (column, row)
    }

    #[test]
    fn test_map_tab_draws_districts_and_note() {
        let mut r = renderer(Tab::Map);
        let out = draw(&mut r);
        assert!(out.contains("Pelasgiótide (11)"));
        assert!(out.contains("no data"));
        assert!(out.contains("n = 57 without region"));
        assert!(out.contains("Olympus"));
    }

    #[test]
    fn test_number_keys_switch_tabs_and_reset_cursor() {
        let mut r = renderer(Tab::Profile);
        press(&mut r, KeyCode::Right);
        assert_eq!(r.chart_cursor, 1);

        press(&mut r, KeyCode::Char('3'));
        assert_eq!(r.dashboard.active_tab(), Tab::Vowels);
        assert_eq!(r.chart_cursor, 0);

        let out = draw(&mut r);
        assert!(out.contains("Category 1"));
        assert!(out.contains("Inscriptions (19)"));
    }

    #[test]
    fn test_chart_cursor_wraps_backwards() {
        let mut r = renderer(Tab::Vowels);
        press(&mut r, KeyCode::Left);
        assert_eq!(r.chart_cursor, 2);
        press(&mut r, KeyCode::Char('l'));
        assert_eq!(r.chart_cursor, 0);
    }

    #[test]
    fn test_keyboard_hover_and_select() {
        let mut r = renderer(Tab::Map);
        press(&mut r, KeyCode::Right);
        assert_eq!(r.dashboard.state().hovered, Some(RegionId::Histiaiotis));

        press(&mut r, KeyCode::Enter);
        assert_eq!(r.dashboard.state().selected, Some(RegionId::Histiaiotis));

        press(&mut r, KeyCode::Esc);
        assert_eq!(r.dashboard.state().hovered, None);
        assert_eq!(r.dashboard.state().selected, Some(RegionId::Histiaiotis));

        let out = draw(&mut r);
        assert!(out.contains("Histiótide (Histiaiotis) · Trikala"));
    }

    #[test]
    fn test_mouse_hover_and_click_on_map() {
        let mut r = renderer(Tab::Map);
        draw(&mut r);
        let (column, row) = cell_over(&r, 230.0, 75.0);

        r.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(r.dashboard.state().hovered, Some(RegionId::Pelasgiotis));

        r.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(r.dashboard.state().selected, Some(RegionId::Pelasgiotis));
    }

    #[test]
    fn test_pointer_leaving_map_clears_hover() {
        let mut r = renderer(Tab::Map);
        draw(&mut r);
        let (column, row) = cell_over(&r, 230.0, 75.0);

        r.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(r.dashboard.state().hovered, Some(RegionId::Pelasgiotis));

        // Bottom-right cell belongs to the footer, outside the canvas
        r.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 139,
            row: 43,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(r.dashboard.state().hovered, None);

        r.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 139,
            row: 43,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(r.dashboard.state().selected, None);
    }

    #[test]
    fn test_click_on_data_less_district_is_ignored() {
        let mut r = renderer(Tab::Map);
        draw(&mut r);
        let (column, row) = cell_over(&r, 210.0, 162.0);

        r.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(r.dashboard.state().selected, None);
    }

    #[test]
    fn test_q_quits() {
        let mut r = renderer(Tab::Map);
        press(&mut r, KeyCode::Char('q'));
        assert!(r.should_quit);
    }
}
