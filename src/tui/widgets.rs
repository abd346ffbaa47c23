//! Custom widgets for the labyrinth UI

use crate::nav::Labyrinth;
use crate::tui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Grid map of the labyrinth. Discovered rooms show the first token of
/// their title, placed-but-hidden rooms show a `?`, the current room is
/// highlighted. Cell geometry scales with the area it is given, so the
/// same widget serves the corner minimap and the fullscreen overlay.
pub struct MiniMap<'a> {
    lab: &'a Labyrinth,
    current_style: Style,
    discovered_style: Style,
    hidden_style: Style,
}

impl<'a> MiniMap<'a> {
    pub fn new(lab: &'a Labyrinth, theme: &Theme) -> Self {
        Self {
            lab,
            current_style: Style::default()
                .fg(Color::Black)
                .bg(theme.current)
                .add_modifier(Modifier::BOLD),
            discovered_style: Style::default().fg(theme.fg).bg(theme.discovered),
            hidden_style: Style::default().fg(theme.hidden),
        }
    }

    /// Extent of the shipped layout in grid cells.
    fn grid_extent(&self) -> (u16, u16) {
        let mut max_x = 0;
        let mut max_y = 0;
        for room in self.lab.rooms() {
            max_x = max_x.max(room.position.x);
            max_y = max_y.max(room.position.y);
        }
        (max_x + 1, max_y + 1)
    }
}

impl Widget for MiniMap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (cols, rows) = self.grid_extent();
        if cols == 0 || rows == 0 {
            return;
        }
        let cell_w = (area.width / cols).max(1);
        let cell_h = (area.height / rows).max(1);
        if cell_w < 2 || cell_h < 1 {
            return;
        }

        for room in self.lab.rooms() {
            let cx = area.x + room.position.x * cell_w;
            let cy = area.y + room.position.y * cell_h;
            if cx + cell_w > area.x + area.width || cy + cell_h > area.y + area.height {
                continue;
            }

            let is_current = room.id == self.lab.current();
            let style = if is_current {
                self.current_style
            } else if room.discovered {
                self.discovered_style
            } else {
                self.hidden_style
            };

            // Fill the cell so discovered rooms read as solid tiles.
            if room.discovered || is_current {
                for dy in 0..cell_h {
                    for dx in 0..cell_w {
                        buf.set_string(cx + dx, cy + dy, " ", style);
                    }
                }
            }

            // Compact label: first whitespace-delimited token of the title.
            let label = if room.discovered || is_current {
                room.map_label().to_string()
            } else {
                "?".to_string()
            };
            let label_x = cx + (cell_w.saturating_sub(label.chars().count() as u16)) / 2;
            let label_y = cy + cell_h / 2;
            buf.set_string(label_x, label_y, &label, style);
        }
    }
}

/// Direction hints for the current room: which arrows lead somewhere.
/// Corridors into undiscovered rooms keep their destination hidden.
pub struct Compass<'a> {
    lab: &'a Labyrinth,
    available_style: Style,
    target_style: Style,
}

impl<'a> Compass<'a> {
    pub fn new(lab: &'a Labyrinth, theme: &Theme) -> Self {
        Self {
            lab,
            available_style: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            target_style: Style::default().fg(theme.fg),
        }
    }
}

impl Widget for Compass<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let corridors = self.lab.available_directions();
        if corridors.is_empty() {
            buf.set_string(
                area.x,
                area.y,
                "No way out...",
                Style::default().fg(Color::Red),
            );
            return;
        }
        for (i, (dir, target)) in corridors.iter().enumerate() {
            if i as u16 >= area.height {
                break;
            }
            let y = area.y + i as u16;
            let arrow = format!("{} {:<5}", dir.arrow(), dir);
            buf.set_string(area.x, y, &arrow, self.available_style);
            let dest = if self.lab.info(*target).discovered {
                self.lab.info(*target).title.clone()
            } else {
                "???".to_string()
            };
            buf.set_string(area.x + 9, y, &dest, self.target_style);
        }
    }
}
