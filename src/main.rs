//! Labyrinth: a portfolio you walk through
//!
//! Terminal entry point: sets up the alternate screen, runs the
//! draw/input loop, and restores the terminal on the way out.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use labyrinth::tui::App;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app (restores saved progress if a save file exists)
    let mut app = App::new();

    // Main loop
    while app.running {
        // Draw
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Handle input
        if !app.handle_input()? {
            break;
        }
    }

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    println!("\n╔══════════════════════════════════════════════╗");
    println!("║  You step out of the labyrinth.              ║");
    println!("║  Your trail stays lit for next time.         ║");
    println!("╚══════════════════════════════════════════════╝\n");

    Ok(())
}
