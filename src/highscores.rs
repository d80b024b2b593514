//! High score persistence
//!
//! The simulation only knows the [`HighScoreStore`] collaborator. Loading
//! never fails (missing or corrupt data reads as 0) and saving is best-effort.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StorageResult;
use crate::persistence::{read_json, write_json};

/// Default location of the score file
pub const DEFAULT_SCORE_FILE: &str = "Contents/scores.json";

/// On-disk record: `{"high_score": 12}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    #[serde(default)]
    pub high_score: u32,
}

/// Where the high score lives between sessions
pub trait HighScoreStore {
    /// Persisted high score, or 0 when there is none or it is unreadable
    fn load_high_score(&mut self) -> u32;
    /// Persist a new high score; failures are swallowed
    fn save_high_score(&mut self, score: u32);
}

/// High score stored as a small JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_FILE)
    }
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> StorageResult<HighScoreRecord> {
        read_json(&self.path)
    }

    pub fn try_save(&self, record: &HighScoreRecord) -> StorageResult<()> {
        write_json(&self.path, record)
    }
}

impl HighScoreStore for JsonFileStore {
    fn load_high_score(&mut self) -> u32 {
        match self.try_load() {
            Ok(record) => {
                log::info!("Loaded high score {} from {}", record.high_score, self.path.display());
                record.high_score
            }
            Err(e) if e.is_not_found() => {
                log::info!("No high score file at {}, starting fresh", self.path.display());
                0
            }
            Err(e) => {
                log::warn!("Ignoring unreadable high score file {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32) {
        match self.try_save(&HighScoreRecord { high_score: score }) {
            Ok(()) => log::info!("High score {} saved", score),
            Err(e) => log::warn!("Could not save high score to {}: {}", self.path.display(), e),
        }
    }
}

/// In-memory store; also records how many writes happened
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub high_score: u32,
    pub saves: u32,
}

impl MemoryStore {
    pub fn with_score(high_score: u32) -> Self {
        Self {
            high_score,
            saves: 0,
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&mut self) -> u32 {
        self.high_score
    }

    fn save_high_score(&mut self, score: u32) {
        self.high_score = score;
        self.saves += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("scores.json"));
        assert_eq!(store.load_high_score(), 0);
    }

    #[test]
    fn test_corrupt_file_loads_zero() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "high score: lots").unwrap();
        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.load_high_score(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Contents/scores.json");
        let mut store = JsonFileStore::new(&path);
        store.save_high_score(17);

        let mut reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.load_high_score(), 17);
    }

    #[test]
    fn test_reads_legacy_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, r#"{"high_score": 23}"#).unwrap();
        assert_eq!(JsonFileStore::new(&path).load_high_score(), 23);

        // Missing key defaults to zero
        fs::write(&path, "{}").unwrap();
        assert_eq!(JsonFileStore::new(&path).load_high_score(), 0);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        // Parent "directory" is a regular file, so the write must fail
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let mut store = JsonFileStore::new(blocker.join("scores.json"));
        store.save_high_score(5);
        assert!(store.try_load().is_err());
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryStore::with_score(3);
        assert_eq!(store.load_high_score(), 3);
        store.save_high_score(8);
        assert_eq!(store.high_score, 8);
        assert_eq!(store.saves, 1);
    }
}
