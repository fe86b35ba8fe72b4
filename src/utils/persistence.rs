//! JSON persistence helpers for files in the platform data directory.

use crate::core::error::PersistenceError;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the data directory path, creating it if needed.
pub fn data_dir() -> Result<PathBuf, PersistenceError> {
    let project_dirs = ProjectDirs::from("", "", "flappy").ok_or(PersistenceError::NoDataDir)?;
    let dir = project_dirs.data_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load a JSON file. A missing file is `Ok(None)`; a malformed one is an error.
pub fn load_json<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> Result<Option<T>, PersistenceError> {
    match fs::read_to_string(path) {
        Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn temp_path(name: &str) -> PathBuf {
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir()
            .join(format!("flappy-persistence-{}-{}", std::process::id(), id))
            .join(name)
    }

    #[test]
    fn test_load_missing_returns_none() {
        let val: Option<Vec<String>> = load_json(&temp_path("missing.json")).unwrap();
        assert!(val.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("data.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&path, &data).expect("save should succeed");

        let loaded: Option<Vec<String>> = load_json(&path).unwrap();
        assert_eq!(loaded, Some(data));

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_malformed_file_is_error() {
        let path = temp_path("bad.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let result: Result<Option<Vec<String>>, _> = load_json(&path);
        assert!(matches!(result, Err(PersistenceError::Serde(_))));

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
