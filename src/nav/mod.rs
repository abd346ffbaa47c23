//! Core navigation state and discovery tracking
//!
//! The whole labyrinth lives in one [`Labyrinth`] value owned by the TUI
//! layer; every mutation goes through its methods. Movement is a pure
//! lookup in a static corridor graph - walking where no corridor exists is
//! not an error, it redirects to the off-map room, unconditionally.

pub mod save;

use crate::data::{
    adjacency, location_table, Adjacency, Direction, LocationId, LocationInfo, LocationTable,
};
use chrono::{DateTime, Utc};
use save::SaveFile;
use std::collections::HashSet;
use std::path::PathBuf;

/// One line in the travel log (for UI display)
#[derive(Debug, Clone)]
pub struct TravelEntry {
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

impl TravelEntry {
    fn new(text: String) -> Self {
        Self {
            timestamp: Utc::now(),
            text,
        }
    }
}

/// The navigation state store
///
/// Holds the current room, the set of rooms ever visited, per-room
/// discovery flags, and the immutable corridor graph. `visited` and the
/// discovery flags are accumulators over the movement history; the only
/// state that influences where `navigate` goes next is `current`.
#[derive(Debug)]
pub struct Labyrinth {
    current: LocationId,
    visited: HashSet<LocationId>,
    map_fullscreen: bool,
    table: LocationTable,
    graph: Adjacency,
    travel_log: Vec<TravelEntry>,
    save_path: Option<PathBuf>,
}

impl Labyrinth {
    /// Fresh state: standing at the start room, only it visited and
    /// discovered, map closed. No persistence attached.
    pub fn new() -> Self {
        let mut lab = Self {
            current: LocationId::START,
            visited: HashSet::from([LocationId::START]),
            map_fullscreen: false,
            table: location_table(),
            graph: adjacency(),
            travel_log: Vec::new(),
            save_path: None,
        };
        lab.log(format!("You wake up at {}.", lab.title_of(lab.current)));
        lab
    }

    /// Attach a save file. Every mutating operation from here on writes a
    /// snapshot to this path; write failures are swallowed and the
    /// in-memory state carries on unaffected.
    pub fn with_save_path(mut self, path: PathBuf) -> Self {
        self.save_path = Some(path);
        self
    }

    /// Restore from disk, or start fresh if there is nothing usable there.
    /// A snapshot that fails to parse is discarded wholesale.
    pub fn load_or_new(path: PathBuf) -> Self {
        let mut lab = Self::new();
        if let Ok(snapshot) = save::read_snapshot(&path) {
            lab.apply_snapshot(snapshot);
            lab.log(format!(
                "Progress restored. You are at {}.",
                lab.title_of(lab.current)
            ));
        }
        lab.with_save_path(path)
    }

    /// Rebuild in-memory state from a snapshot, repairing the invariants a
    /// hand-edited file could break: the start room and the current room
    /// are always visited, and everything visited is discovered.
    fn apply_snapshot(&mut self, snapshot: SaveFile) {
        self.current = snapshot.current;
        self.visited = snapshot.visited.into_iter().collect();
        self.visited.insert(LocationId::START);
        self.visited.insert(self.current);
        for id in snapshot.discovered {
            if let Some(room) = self.table.get_mut(&id) {
                room.discovered = true;
            }
        }
        for id in self.visited.clone() {
            if let Some(room) = self.table.get_mut(&id) {
                room.discovered = true;
            }
        }
    }

    fn persist(&self) {
        if let Some(path) = &self.save_path {
            // Fire-and-forget: a failed write degrades to in-memory state
            // for this session, nothing more.
            let _ = save::write_snapshot(path, &SaveFile::capture(self));
        }
    }

    fn log(&mut self, text: String) {
        self.travel_log.push(TravelEntry::new(text));
        // Keep the log bounded for long sessions.
        while self.travel_log.len() > 100 {
            self.travel_log.remove(0);
        }
    }

    fn title_of(&self, id: LocationId) -> String {
        self.table
            .get(&id)
            .map(|r| r.title.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Jump straight to a room, graph not consulted. Used by the map
    /// overlay for travel to already-discovered rooms, and internally by
    /// [`navigate`](Self::navigate).
    pub fn navigate_to(&mut self, target: LocationId) {
        self.current = target;
        self.visited.insert(target);
        if let Some(room) = self.table.get_mut(&target) {
            room.discovered = true;
        }
        self.log(format!("You arrive at {}.", self.title_of(target)));
        self.persist();
    }

    /// Walk one step. If the corridor exists, follow it; otherwise fall
    /// through the floor into the off-map room. Same fallback for every
    /// missing corridor, from every room - the off-map room itself has no
    /// corridors, so further steps from there loop back to it.
    pub fn navigate(&mut self, direction: Direction) {
        let target = self
            .graph
            .get(&self.current)
            .and_then(|out| out.get(&direction))
            .copied();
        match target {
            Some(next) => self.navigate_to(next),
            None => {
                self.log(format!("You walk {} into the dark...", direction));
                self.navigate_to(LocationId::FALLBACK);
            }
        }
    }

    /// Flip the fullscreen map overlay. Purely presentational; does not
    /// touch the save file.
    pub fn toggle_map(&mut self) {
        self.map_fullscreen = !self.map_fullscreen;
    }

    /// Reveal a room on the map without travelling there. Idempotent;
    /// current room and visited set are untouched.
    pub fn mark_discovered(&mut self, id: LocationId) {
        if let Some(room) = self.table.get_mut(&id) {
            room.discovered = true;
        }
        self.persist();
    }

    /// Wipe all progress: back to the start room, visited set down to the
    /// singleton, discovery flags back to their initial configuration.
    /// The corridor graph is configuration, not progress; it stays.
    pub fn reset_progress(&mut self) {
        self.current = LocationId::START;
        self.visited = HashSet::from([LocationId::START]);
        self.map_fullscreen = false;
        self.table = location_table();
        self.log("The labyrinth shifts. Everything is forgotten.".to_string());
        self.persist();
    }

    // Read access for the rendering layer.

    pub fn current(&self) -> LocationId {
        self.current
    }

    pub fn current_info(&self) -> &LocationInfo {
        &self.table[&self.current]
    }

    pub fn info(&self, id: LocationId) -> &LocationInfo {
        &self.table[&id]
    }

    pub fn rooms(&self) -> impl Iterator<Item = &LocationInfo> {
        self.table.values()
    }

    pub fn is_visited(&self, id: LocationId) -> bool {
        self.visited.contains(&id)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn discovered_count(&self) -> usize {
        self.table.values().filter(|r| r.discovered).count()
    }

    pub fn map_fullscreen(&self) -> bool {
        self.map_fullscreen
    }

    pub fn travel_log(&self) -> &[TravelEntry] {
        &self.travel_log
    }

    /// Corridors leading out of the current room, for the compass hint.
    pub fn available_directions(&self) -> Vec<(Direction, LocationId)> {
        let out = match self.graph.get(&self.current) {
            Some(out) => out,
            None => return Vec::new(),
        };
        Direction::ALL
            .iter()
            .filter_map(|d| out.get(d).map(|to| (*d, *to)))
            .collect()
    }
}

impl Default for Labyrinth {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(lab: &Labyrinth) {
        assert!(lab.is_visited(lab.current()), "current must be visited");
        for id in LocationId::ALL {
            if lab.is_visited(id) {
                assert!(lab.info(id).discovered, "{} visited but undiscovered", id);
            }
        }
    }

    #[test]
    fn starts_at_home_with_singleton_visited() {
        let lab = Labyrinth::new();
        assert_eq!(lab.current(), LocationId::Home);
        assert_eq!(lab.visited_count(), 1);
        assert_eq!(lab.discovered_count(), 1);
        assert!(!lab.map_fullscreen());
        assert_invariants(&lab);
    }

    #[test]
    fn walking_up_from_home_discovers_formation() {
        let mut lab = Labyrinth::new();
        lab.navigate(Direction::Up);
        assert_eq!(lab.current(), LocationId::Formation);
        assert!(lab.is_visited(LocationId::Home));
        assert!(lab.is_visited(LocationId::Formation));
        assert!(lab.info(LocationId::Formation).discovered);
        assert_invariants(&lab);
    }

    #[test]
    fn missing_corridor_falls_through_to_lost() {
        let mut lab = Labyrinth::new();
        lab.navigate(Direction::Up); // formation
        lab.navigate(Direction::Left); // no left corridor there
        assert_eq!(lab.current(), LocationId::Lost);
        assert!(lab.is_visited(LocationId::Home));
        assert!(lab.is_visited(LocationId::Formation));
        assert!(lab.is_visited(LocationId::Lost));
        assert_invariants(&lab);
    }

    #[test]
    fn every_missing_edge_redirects_to_the_same_fallback() {
        let graph = adjacency();
        for from in LocationId::ALL {
            for d in Direction::ALL {
                let has_edge = graph.get(&from).and_then(|o| o.get(&d)).is_some();
                if has_edge {
                    continue;
                }
                let mut lab = Labyrinth::new();
                lab.navigate_to(from);
                lab.navigate(d);
                assert_eq!(
                    lab.current(),
                    LocationId::FALLBACK,
                    "({}, {}) should fall back",
                    from,
                    d
                );
            }
        }
    }

    #[test]
    fn lost_loops_back_to_itself() {
        let mut lab = Labyrinth::new();
        lab.navigate_to(LocationId::Lost);
        for d in Direction::ALL {
            lab.navigate(d);
            assert_eq!(lab.current(), LocationId::Lost);
        }
    }

    #[test]
    fn navigation_is_history_independent() {
        // Two different routes into the same room step identically
        // afterwards; the accumulators differ, the transitions do not.
        let mut short = Labyrinth::new();
        short.navigate_to(LocationId::Personal);

        let mut long = Labyrinth::new();
        long.navigate(Direction::Up);
        long.navigate(Direction::Down);
        long.navigate(Direction::Right); // personal

        assert_eq!(short.current(), long.current());
        for d in Direction::ALL {
            let mut a = Labyrinth::new();
            a.navigate_to(LocationId::Personal);
            a.navigate(d);
            let mut b = Labyrinth::new();
            b.navigate(Direction::Right);
            b.navigate(d);
            assert_eq!(a.current(), b.current(), "diverged on {}", d);
        }
    }

    #[test]
    fn direct_travel_ignores_the_graph() {
        // Simulates a map click on a far-away discovered room.
        let mut lab = Labyrinth::new();
        lab.navigate_to(LocationId::Games);
        assert_eq!(lab.current(), LocationId::Games);
        assert!(lab.is_visited(LocationId::Games));
        assert_invariants(&lab);
    }

    #[test]
    fn discovery_is_monotonic_under_navigation() {
        let mut lab = Labyrinth::new();
        let walk = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ];
        let mut seen: HashSet<LocationId> = HashSet::new();
        let mut visited_before = lab.visited_count();
        for d in walk {
            lab.navigate(d);
            for id in &seen {
                assert!(lab.info(*id).discovered, "{} flipped back to hidden", id);
            }
            seen.extend(LocationId::ALL.iter().filter(|id| lab.info(**id).discovered));
            assert!(lab.visited_count() >= visited_before, "visited set shrank");
            visited_before = lab.visited_count();
            assert_invariants(&lab);
        }
    }

    #[test]
    fn mark_discovered_reveals_without_travel() {
        let mut lab = Labyrinth::new();
        lab.mark_discovered(LocationId::Literature);
        assert!(lab.info(LocationId::Literature).discovered);
        assert_eq!(lab.current(), LocationId::Home);
        assert!(!lab.is_visited(LocationId::Literature));
        // Idempotent.
        lab.mark_discovered(LocationId::Literature);
        assert!(lab.info(LocationId::Literature).discovered);
        assert_eq!(lab.visited_count(), 1);
    }

    #[test]
    fn toggle_map_flips_only_the_flag() {
        let mut lab = Labyrinth::new();
        lab.toggle_map();
        assert!(lab.map_fullscreen());
        assert_eq!(lab.current(), LocationId::Home);
        assert_eq!(lab.visited_count(), 1);
        lab.toggle_map();
        assert!(!lab.map_fullscreen());
    }

    #[test]
    fn reset_restores_the_initial_snapshot() {
        let mut lab = Labyrinth::new();
        lab.navigate(Direction::Up);
        lab.navigate(Direction::Left);
        lab.mark_discovered(LocationId::Music);
        lab.toggle_map();
        lab.reset_progress();

        assert_eq!(lab.current(), LocationId::Home);
        assert_eq!(lab.visited_count(), 1);
        assert!(lab.is_visited(LocationId::Home));
        assert!(!lab.map_fullscreen());
        for id in LocationId::ALL {
            assert_eq!(
                lab.info(id).discovered,
                id == LocationId::START,
                "discovery flag for {} not back to initial",
                id
            );
        }
        // The graph survived the reset.
        lab.navigate(Direction::Up);
        assert_eq!(lab.current(), LocationId::Formation);
    }

    #[test]
    fn compass_lists_corridors_in_fixed_order() {
        let lab = Labyrinth::new();
        let dirs: Vec<Direction> = lab
            .available_directions()
            .into_iter()
            .map(|(d, _)| d)
            .collect();
        assert_eq!(dirs, Direction::ALL.to_vec());

        let mut lost = Labyrinth::new();
        lost.navigate_to(LocationId::Lost);
        assert!(lost.available_directions().is_empty());
    }
}
