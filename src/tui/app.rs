//! Main application state and rendering

use crate::data::{Direction, LocationId};
use crate::nav::{save, Labyrinth};
use crate::tui::widgets::{Compass, MiniMap};
use crate::tui::{
    create_content_layout, create_main_layout, create_side_layout, styled_block, Theme, HELP_TEXT,
    SMALL_LOGO,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Application state
pub struct App {
    pub labyrinth: Labyrinth,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub map_state: ListState,
}

impl App {
    pub fn new() -> Self {
        let labyrinth = match save::default_save_path() {
            Ok(path) => Labyrinth::load_or_new(path),
            Err(_) => Labyrinth::new(),
        };
        let mut map_state = ListState::default();
        map_state.select(Some(0));
        Self {
            labyrinth,
            theme: Theme::default(),
            running: true,
            show_help: false,
            map_state,
        }
    }

    /// Rooms eligible for direct travel from the map overlay, in a stable
    /// order: discovered only.
    fn travel_targets(&self) -> Vec<LocationId> {
        LocationId::ALL
            .into_iter()
            .filter(|id| self.labyrinth.info(*id).discovered)
            .collect()
    }

    /// Handle keyboard input
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }

                if self.show_help {
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                        self.show_help = false;
                    }
                    return Ok(true);
                }

                // The fullscreen map captures the keyboard while open.
                if self.labyrinth.map_fullscreen() {
                    match key.code {
                        KeyCode::Up => self.map_select_prev(),
                        KeyCode::Down => self.map_select_next(),
                        KeyCode::Enter => {
                            let targets = self.travel_targets();
                            if let Some(target) = self
                                .map_state
                                .selected()
                                .and_then(|i| targets.get(i).copied())
                            {
                                self.labyrinth.navigate_to(target);
                            }
                            self.labyrinth.toggle_map();
                        }
                        KeyCode::Char('m') | KeyCode::Esc => self.labyrinth.toggle_map(),
                        KeyCode::Char('q') => {
                            self.running = false;
                            return Ok(false);
                        }
                        _ => {}
                    }
                    return Ok(true);
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        self.running = false;
                        return Ok(false);
                    }
                    KeyCode::Char('?') => self.show_help = true,
                    KeyCode::Char('m') => {
                        self.labyrinth.toggle_map();
                        self.sync_map_selection();
                    }
                    KeyCode::Char('R') => self.labyrinth.reset_progress(),
                    KeyCode::Up => self.labyrinth.navigate(Direction::Up),
                    KeyCode::Down => self.labyrinth.navigate(Direction::Down),
                    KeyCode::Left => self.labyrinth.navigate(Direction::Left),
                    KeyCode::Right => self.labyrinth.navigate(Direction::Right),
                    _ => {}
                }
            }
        }
        Ok(true)
    }

    /// Point the map cursor at the current room when the overlay opens.
    fn sync_map_selection(&mut self) {
        let targets = self.travel_targets();
        let idx = targets
            .iter()
            .position(|id| *id == self.labyrinth.current())
            .unwrap_or(0);
        self.map_state.select(Some(idx));
    }

    fn map_select_prev(&mut self) {
        let len = self.travel_targets().len();
        if len == 0 {
            return;
        }
        let i = self.map_state.selected().unwrap_or(0);
        self.map_state.select(Some(if i == 0 { len - 1 } else { i - 1 }));
    }

    fn map_select_next(&mut self) {
        let len = self.travel_targets().len();
        if len == 0 {
            return;
        }
        let i = self.map_state.selected().unwrap_or(0);
        self.map_state.select(Some((i + 1) % len));
    }

    /// Render the whole frame
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = create_main_layout(frame.size());
        self.render_header(frame, chunks[0]);
        self.render_content(frame, chunks[1]);
        self.render_status(frame, chunks[2]);

        if self.labyrinth.map_fullscreen() {
            self.render_map_overlay(frame);
        }
        if self.show_help {
            self.render_help(frame);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let info = self.labyrinth.current_info();
        let line = Line::from(vec![
            Span::styled(
                SMALL_LOGO,
                Style::default()
                    .fg(self.theme.header)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                info.title.clone(),
                Style::default()
                    .fg(self.theme.current)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                info.description.clone(),
                Style::default().fg(self.theme.hidden),
            ),
        ]);
        let header = Paragraph::new(line)
            .block(styled_block("Labyrinth", &self.theme))
            .alignment(Alignment::Left);
        frame.render_widget(header, area);
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let chunks = create_content_layout(area);

        let body = crate::data::page_body(self.labyrinth.current());
        let body = if self.labyrinth.current() == LocationId::Home {
            format!("{}\n{}", crate::tui::LOGO, body)
        } else {
            body.to_string()
        };
        let page = Paragraph::new(body)
            .block(styled_block(&self.labyrinth.current_info().title, &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(page, chunks[0]);

        let side = create_side_layout(chunks[1]);

        let compass_block = styled_block("Compass", &self.theme);
        let compass_area = compass_block.inner(side[0]);
        frame.render_widget(compass_block, side[0]);
        frame.render_widget(Compass::new(&self.labyrinth, &self.theme), compass_area);

        let map_block = styled_block("Map (m)", &self.theme);
        let map_area = map_block.inner(side[1]);
        frame.render_widget(map_block, side[1]);
        frame.render_widget(MiniMap::new(&self.labyrinth, &self.theme), map_area);

        let log_items: Vec<ListItem> = self
            .labyrinth
            .travel_log()
            .iter()
            .rev()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        entry.timestamp.format("%H:%M:%S ").to_string(),
                        Style::default().fg(self.theme.hidden),
                    ),
                    Span::raw(entry.text.clone()),
                ]))
            })
            .collect();
        let log = List::new(log_items).block(styled_block("Travel log", &self.theme));
        frame.render_widget(log, side[2]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let text = format!(
            " {} of {} rooms discovered │ arrows: walk │ m: map │ ?: help │ q: quit ",
            self.labyrinth.discovered_count(),
            LocationId::ALL.len(),
        );
        let status = Paragraph::new(text)
            .style(Style::default().fg(self.theme.fg))
            .block(styled_block("Status", &self.theme));
        frame.render_widget(status, area);
    }

    fn render_map_overlay(&mut self, frame: &mut Frame) {
        let area = centered_rect(70, 80, frame.size());
        frame.render_widget(Clear, area);

        let block = styled_block("🗺️ Labyrinth Map", &self.theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let halves = Layout::default()
            .direction(ratatui::layout::Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        frame.render_widget(MiniMap::new(&self.labyrinth, &self.theme), halves[0]);

        let items: Vec<ListItem> = self
            .travel_targets()
            .into_iter()
            .map(|id| {
                let info = self.labyrinth.info(id);
                let marker = if id == self.labyrinth.current() {
                    "● "
                } else {
                    "  "
                };
                ListItem::new(format!("{}{}", marker, info.title))
            })
            .collect();
        let list = List::new(items)
            .block(styled_block("Travel to (Enter)", &self.theme))
            .highlight_style(
                Style::default()
                    .fg(self.theme.current)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("➤ ");
        frame.render_stateful_widget(list, halves[1], &mut self.map_state);
    }

    fn render_help(&self, frame: &mut Frame) {
        let area = centered_rect(60, 70, frame.size());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(HELP_TEXT)
            .block(styled_block("Help", &self.theme))
            .alignment(Alignment::Center);
        frame.render_widget(help, area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Centered overlay rectangle, percentage-sized.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
