//! Labyrinth: a portfolio you walk through
//!
//! A terminal portfolio framed as a navigable labyrinth: each page of
//! content is a room, and you move between rooms with the arrow keys.
//! A minimap tracks which rooms you have discovered, and progress
//! persists between sessions.
//!
//! # Mechanics
//!
//! - **Navigation**: arrow keys move between adjacent rooms
//! - **Discovery**: rooms you reach light up on the minimap
//! - **Getting lost**: walking where no path exists is not an error -
//!   it drops you in a hidden off-map room
//!
//! # Architecture
//!
//! - `nav` - Core navigation state store and save file handling
//! - `tui` - Terminal user interface with ratatui
//! - `data` - Locations, directions, and the shipped labyrinth layout

pub mod data;
pub mod nav;
pub mod tui;

pub use nav::Labyrinth;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the crate
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum LabyrinthError {
    #[error("Save file corrupted: {0}")]
    CorruptedSave(String),

    #[error("No writable data directory available")]
    NoDataDir,

    #[error("Save I/O failed: {0}")]
    SaveIo(#[from] std::io::Error),
}
