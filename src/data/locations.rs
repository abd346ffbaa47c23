//! The shipped labyrinth layout
//!
//! The corridor graph and room metadata are fixed configuration, built once
//! at startup and never mutated (discovery flags live on the copies owned by
//! the state store, not here). The graph is directed and deliberately
//! asymmetric: a corridor out of a room does not imply a corridor back.

use super::{Direction, LocationId, LocationInfo, Position};
use std::collections::HashMap;

/// Room metadata keyed by id.
pub type LocationTable = HashMap<LocationId, LocationInfo>;

/// At most one corridor per direction per room.
pub type Adjacency = HashMap<LocationId, HashMap<Direction, LocationId>>;

fn info(
    id: LocationId,
    title: &str,
    description: &str,
    discovered: bool,
    x: u16,
    y: u16,
) -> LocationInfo {
    LocationInfo {
        id,
        title: title.to_string(),
        description: description.to_string(),
        discovered,
        position: Position::new(x, y),
    }
}

/// Build the full room table in its initial discovery state: only the start
/// room is pre-discovered, everything else (the off-map room included) waits
/// to be found.
pub fn location_table() -> LocationTable {
    use LocationId::*;
    let rooms = [
        info(Home, "🏠 Home", "The center of the labyrinth", true, 4, 4),
        info(Formation, "🎓 Formation", "Education & Skills", false, 4, 3),
        info(Projects, "💻 Projects", "My Work", false, 3, 4),
        info(Blockchain, "💰 Blockchain", "My blockchain", false, 3, 3),
        info(
            Entrepreneurship,
            "💼 Entrepreneurship",
            "My entrepreneurship",
            false,
            2,
            4,
        ),
        info(
            PersonalProjects,
            "💻 Personal Projects",
            "My personal projects",
            false,
            3,
            5,
        ),
        info(Personal, "🎯 Personal", "About Me", false, 5, 4),
        info(Health, "🧘 Health", "My health", false, 5, 5),
        info(Music, "🎵 Music", "My soundtrack", false, 5, 3),
        info(Games, "🎮 Games", "My games", false, 6, 4),
        info(Literature, "📚 Literature", "My literature", false, 7, 4),
        info(Ai, "🤖 AI", "Artificial Intelligence", false, 4, 5),
        info(Lost, "❌ Lost", "You found a secret!", false, 0, 0),
    ];
    rooms.into_iter().map(|r| (r.id, r)).collect()
}

/// Build the corridor graph. Some rooms have no way in from the start and
/// the off-map room has no way out at all; both are part of the shipped
/// layout and are preserved as-is.
pub fn adjacency() -> Adjacency {
    use Direction::*;
    use LocationId::*;

    let edges: [(LocationId, &[(Direction, LocationId)]); 12] = [
        (
            Home,
            &[
                (Up, Formation),
                (Down, Ai),
                (Left, Projects),
                (Right, Personal),
            ],
        ),
        (Formation, &[(Down, Home)]),
        (
            Projects,
            &[
                (Up, Blockchain),
                (Down, PersonalProjects),
                (Right, Home),
                (Left, Entrepreneurship),
            ],
        ),
        (Blockchain, &[(Down, Projects)]),
        (Entrepreneurship, &[(Right, Projects)]),
        (PersonalProjects, &[(Up, Projects)]),
        (
            Personal,
            &[(Up, Music), (Down, Health), (Right, Games), (Left, Home)],
        ),
        (Health, &[(Up, Personal)]),
        (Music, &[(Down, Personal)]),
        (Literature, &[(Left, Games)]),
        (Games, &[(Left, Personal), (Right, Literature)]),
        (Ai, &[(Up, Home)]),
    ];

    edges
        .into_iter()
        .map(|(from, out)| (from, out.iter().copied().collect()))
        .collect()
}

/// Long-form content for the main pane. Rooms still under construction get
/// the stock placeholder, matching the shipped site.
pub fn page_body(id: LocationId) -> &'static str {
    match id {
        LocationId::Home => {
            "Welcome to the Labyrinth\n\n\
             Natheo's intentionally weird portfolio.\n\n\
             Every page is a room. Use the arrow keys to wander between\n\
             them, and press M to check the map. Rooms you have visited\n\
             stay lit; the rest of the maze keeps its secrets until you\n\
             walk in."
        }
        LocationId::Formation => {
            "Education & skills: where the foundations were poured.\n\n\
             More content coming soon... 🚧"
        }
        LocationId::Projects => {
            "My work: the things I have shipped and the scars to prove it.\n\n\
             More content coming soon... 🚧"
        }
        LocationId::Blockchain => {
            "Blockchain experiments and on-chain tinkering.\n\n\
             More content coming soon... 🚧"
        }
        LocationId::Entrepreneurship => {
            "Ventures, false starts, and lessons bought at full price.\n\n\
             More content coming soon... 🚧"
        }
        LocationId::PersonalProjects => {
            "Side projects built for no better reason than wanting them\n\
             to exist.\n\n\
             More content coming soon... 🚧"
        }
        LocationId::Personal => {
            "About me: the person behind the maze.\n\n\
             More content coming soon... 🚧"
        }
        LocationId::Health => {
            "Training, recovery, and staying human.\n\n\
             More content coming soon... 🚧"
        }
        LocationId::Music => {
            "The soundtrack this site was built to.\n\n\
             More content coming soon... 🚧"
        }
        LocationId::Games => {
            "Games played, games loved, games abandoned at the final boss.\n\n\
             More content coming soon... 🚧"
        }
        LocationId::Literature => {
            "Books worth losing sleep over.\n\n\
             More content coming soon... 🚧"
        }
        LocationId::Ai => {
            "Artificial intelligence: work, play, and everything between.\n\n\
             More content coming soon... 🚧"
        }
        LocationId::Lost => {
            "You're lost!\n\n\
             But that's okay... you found a secret! 🎉\n\n\
             You tried to walk in a direction that doesn't exist. This\n\
             room is off every map, and every wrong turn in the maze leads\n\
             back here. Use the map (M) to travel back to known territory."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_location() {
        let table = location_table();
        for id in LocationId::ALL {
            assert!(table.contains_key(&id), "missing table entry for {}", id);
        }
        assert_eq!(table.len(), LocationId::ALL.len());
    }

    #[test]
    fn only_start_is_pre_discovered() {
        let table = location_table();
        for (id, room) in &table {
            assert_eq!(
                room.discovered,
                *id == LocationId::START,
                "wrong initial discovery flag for {}",
                id
            );
        }
    }

    #[test]
    fn every_edge_targets_a_known_room() {
        let table = location_table();
        for (from, out) in adjacency() {
            assert!(table.contains_key(&from));
            for to in out.values() {
                assert!(table.contains_key(to), "{} points at unknown room", from);
            }
        }
    }

    #[test]
    fn fallback_has_no_way_out() {
        let graph = adjacency();
        assert!(graph.get(&LocationId::FALLBACK).is_none());
    }

    #[test]
    fn shipped_graph_matches_the_site() {
        let graph = adjacency();
        assert_eq!(
            graph[&LocationId::Home][&Direction::Up],
            LocationId::Formation
        );
        assert_eq!(graph[&LocationId::Home][&Direction::Down], LocationId::Ai);
        assert_eq!(
            graph[&LocationId::Games][&Direction::Right],
            LocationId::Literature
        );
        // Asymmetry is intentional: formation only leads back down.
        assert_eq!(graph[&LocationId::Formation].len(), 1);
        assert!(graph[&LocationId::Formation]
            .get(&Direction::Left)
            .is_none());
    }

    #[test]
    fn positions_are_unique_in_shipped_layout() {
        let table = location_table();
        let mut seen = std::collections::HashSet::new();
        for room in table.values() {
            assert!(
                seen.insert(room.position),
                "duplicate position {:?}",
                room.position
            );
        }
    }

    #[test]
    fn map_label_is_first_title_token() {
        let table = location_table();
        assert_eq!(table[&LocationId::Home].map_label(), "🏠");
        assert_eq!(table[&LocationId::PersonalProjects].map_label(), "💻");
    }
}
