//! Data structures for the labyrinth
//!
//! Defines locations, directions, and the static layout of the maze.

pub mod locations;

pub use locations::{adjacency, location_table, page_body, Adjacency, LocationTable};

use serde::{Deserialize, Serialize};

/// Every room in the labyrinth. The set is closed at build time; there is
/// no way to mint a location that the map does not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationId {
    Home,
    Formation,
    Projects,
    Blockchain,
    Entrepreneurship,
    PersonalProjects,
    Personal,
    Health,
    Music,
    Games,
    Literature,
    Ai,
    /// The off-map room. Walking in a direction with no corridor always
    /// lands here, from anywhere - including from here.
    #[serde(rename = "404")]
    Lost,
}

impl LocationId {
    /// All locations, in minimap legend order.
    pub const ALL: [LocationId; 13] = [
        LocationId::Home,
        LocationId::Formation,
        LocationId::Projects,
        LocationId::Blockchain,
        LocationId::Entrepreneurship,
        LocationId::PersonalProjects,
        LocationId::Personal,
        LocationId::Health,
        LocationId::Music,
        LocationId::Games,
        LocationId::Literature,
        LocationId::Ai,
        LocationId::Lost,
    ];

    /// Where every run begins.
    pub const START: LocationId = LocationId::Home;

    /// Where every failed move ends.
    pub const FALLBACK: LocationId = LocationId::Lost;
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LocationId::Home => "home",
            LocationId::Formation => "formation",
            LocationId::Projects => "projects",
            LocationId::Blockchain => "blockchain",
            LocationId::Entrepreneurship => "entrepreneurship",
            LocationId::PersonalProjects => "personal-projects",
            LocationId::Personal => "personal",
            LocationId::Health => "health",
            LocationId::Music => "music",
            LocationId::Games => "games",
            LocationId::Literature => "literature",
            LocationId::Ai => "ai",
            LocationId::Lost => "404",
        };
        write!(f, "{}", name)
    }
}

/// The four ways you can walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Left => "←",
            Direction::Right => "→",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Grid coordinate on the minimap. Only used for layout; coordinates are
/// unique in the shipped configuration but nothing depends on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Display metadata for one room, as the minimap and header consume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInfo {
    pub id: LocationId,
    pub title: String,
    pub description: String,
    pub discovered: bool,
    pub position: Position,
}

impl LocationInfo {
    /// The compact label the minimap shows: the first whitespace-delimited
    /// token of the title (for the shipped titles, the leading glyph).
    pub fn map_label(&self) -> &str {
        self.title.split_whitespace().next().unwrap_or("")
    }
}
