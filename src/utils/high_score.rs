//! Best-score storage.

use super::persistence::{load_json, save_json};
use crate::core::collaborators::HighScoreStore;
use crate::core::constants::HIGH_SCORE_FILE;
use crate::core::error::PersistenceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The persisted best score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub best: u32,
    /// Unix timestamp of the round that set it.
    pub achieved_at: i64,
}

impl HighScoreRecord {
    pub fn achieved_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.achieved_at, 0)
    }
}

/// Stores the best score as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonHighScoreStore {
    path: PathBuf,
}

impl JsonHighScoreStore {
    /// Store as `best_score.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::at(dir.join(HIGH_SCORE_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> Result<Option<HighScoreRecord>, PersistenceError> {
        load_json(&self.path)
    }
}

impl HighScoreStore for JsonHighScoreStore {
    fn load(&self) -> Result<Option<u32>, PersistenceError> {
        Ok(self.record()?.map(|r| r.best))
    }

    fn save(&mut self, score: u32) -> Result<(), PersistenceError> {
        let record = HighScoreRecord {
            best: score,
            achieved_at: Utc::now().timestamp(),
        };
        save_json(&self.path, &record)
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    pub best: Option<u32>,
    /// Every score passed to `save`, in order.
    pub saves: Vec<u32>,
    /// Make every `save` fail.
    pub fail_saves: bool,
}

impl MemoryHighScoreStore {
    pub fn with_best(best: u32) -> Self {
        Self {
            best: Some(best),
            ..Default::default()
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<Option<u32>, PersistenceError> {
        Ok(self.best)
    }

    fn save(&mut self, score: u32) -> Result<(), PersistenceError> {
        if self.fail_saves {
            return Err(PersistenceError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        self.best = Some(score);
        self.saves.push(score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_store() -> JsonHighScoreStore {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!("flappy-score-{}-{}", std::process::id(), id));
        JsonHighScoreStore::in_dir(&dir)
    }

    #[test]
    fn test_in_dir_uses_score_file_name() {
        let store = JsonHighScoreStore::in_dir(Path::new("/tmp/flappy"));
        assert_eq!(store.path(), Path::new("/tmp/flappy").join(HIGH_SCORE_FILE));
    }

    #[test]
    fn test_missing_file_means_no_best() {
        let store = temp_store();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = temp_store();
        store.save(17).unwrap();

        assert_eq!(store.load().unwrap(), Some(17));
        let record = store.record().unwrap().unwrap();
        assert_eq!(record.best, 17);
        assert!(record.achieved_at().is_some());

        fs::remove_dir_all(store.path().parent().unwrap()).ok();
    }

    #[test]
    fn test_memory_store_records_saves() {
        let mut store = MemoryHighScoreStore::with_best(3);
        store.save(5).unwrap();
        assert_eq!(store.load().unwrap(), Some(5));
        assert_eq!(store.saves, vec![5]);
    }

    #[test]
    fn test_memory_store_failure() {
        let mut store = MemoryHighScoreStore {
            fail_saves: true,
            ..Default::default()
        };
        assert!(store.save(1).is_err());
        assert_eq!(store.best, None);
    }
}
