//! Terminal User Interface
//!
//! Renders the labyrinth with ratatui: content pane, compass, minimap.

pub mod app;
pub mod widgets;

pub use app::App;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub current: Color,
    pub discovered: Color,
    pub hidden: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            current: Color::Yellow,
            discovered: Color::Blue,
            hidden: Color::DarkGray,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔════════════════════════════════════════════════════════════╗
║                                                            ║
║   ██╗      █████╗ ██████╗ ██╗   ██╗██████╗ ██╗███╗   ██╗  ║
║   ██║     ██╔══██╗██╔══██╗╚██╗ ██╔╝██╔══██╗██║████╗  ██║  ║
║   ██║     ███████║██████╔╝ ╚████╔╝ ██████╔╝██║██╔██╗ ██║  ║
║   ██║     ██╔══██║██╔══██╗  ╚██╔╝  ██╔══██╗██║██║╚██╗██║  ║
║   ███████╗██║  ██║██████╔╝   ██║   ██║  ██║██║██║ ╚████║  ║
║   ╚══════╝╚═╝  ╚═╝╚═════╝    ╚═╝   ╚═╝  ╚═╝╚═╝╚═╝  ╚═══╝  ║
║                                                            ║
║            A portfolio you walk through                    ║
╚════════════════════════════════════════════════════════════╝
"#;

/// Small header tag
pub const SMALL_LOGO: &str = " LABYRINTH ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════════════════╗
║                       CONTROLS                            ║
╠═══════════════════════════════════════════════════════════╣
║  ↑ ↓ ← →  Walk through the labyrinth                      ║
║  m        Toggle the fullscreen map                       ║
║  ?        Toggle this help                                ║
║  q        Quit                                            ║
╠═══════════════════════════════════════════════════════════╣
║                    ON THE MAP                             ║
╠═══════════════════════════════════════════════════════════╣
║  ↑ ↓      Select a discovered room                        ║
║  Enter    Travel there directly                           ║
║  m / Esc  Close the map                                   ║
╠═══════════════════════════════════════════════════════════╣
║  R        Reset all progress (forget everything)          ║
╚═══════════════════════════════════════════════════════════╝
"#;

/// Create the main layout: header, content, status bar
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the content layout: page pane + side panel
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(70), // Page content
            Constraint::Percentage(30), // Compass + minimap + log
        ])
        .split(area)
        .to_vec()
}

/// Create the side panel layout: compass, minimap, travel log
pub fn create_side_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),  // Compass
            Constraint::Length(15), // Minimap
            Constraint::Min(4),     // Travel log
        ])
        .split(area)
        .to_vec()
}
