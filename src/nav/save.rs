//! Save file handling
//!
//! Progress is a small versionless JSON record under the platform data
//! directory. The visited collection is stored as an ordered list, not a
//! set; the in-memory set view is rebuilt on load. Writes go through a
//! temp file and rename so a crash mid-write cannot corrupt the previous
//! save.

use super::Labyrinth;
use crate::data::LocationId;
use crate::LabyrinthError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The on-disk snapshot. No version field, no migrations: a record that
/// no longer parses is thrown away and replaced by a fresh start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFile {
    pub current: LocationId,
    pub visited: Vec<LocationId>,
    pub discovered: Vec<LocationId>,
    pub saved_at: DateTime<Utc>,
}

impl SaveFile {
    /// Snapshot the store. Collections are written in declaration order so
    /// the record is stable across saves of the same state.
    pub fn capture(lab: &Labyrinth) -> Self {
        let visited: Vec<LocationId> = LocationId::ALL
            .into_iter()
            .filter(|id| lab.is_visited(*id))
            .collect();
        let discovered: Vec<LocationId> = LocationId::ALL
            .into_iter()
            .filter(|id| lab.info(*id).discovered)
            .collect();
        Self {
            current: lab.current(),
            visited,
            discovered,
            saved_at: Utc::now(),
        }
    }
}

/// Default location: `<data_dir>/labyrinth/save.json`.
pub fn default_save_path() -> Result<PathBuf, LabyrinthError> {
    let base = dirs::data_dir().ok_or(LabyrinthError::NoDataDir)?;
    Ok(base.join("labyrinth").join("save.json"))
}

/// Write a snapshot atomically: serialize to `<path>.tmp`, then rename
/// over the real file.
pub fn write_snapshot(path: &Path, snapshot: &SaveFile) -> Result<(), LabyrinthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| LabyrinthError::CorruptedSave(e.to_string()))?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Read a snapshot back. Any failure - missing file, unreadable bytes,
/// JSON that no longer matches the record shape - surfaces as an error the
/// caller discards in favor of the initial snapshot.
pub fn read_snapshot(path: &Path) -> Result<SaveFile, LabyrinthError> {
    let bytes = fs::read_to_string(path)?;
    serde_json::from_str(&bytes).map_err(|e| LabyrinthError::CorruptedSave(e.to_string()))
}
