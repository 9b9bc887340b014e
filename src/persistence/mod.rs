//! High score persistence behind a key/value contract
//!
//! The simulation only needs "read one integer, write one integer". The
//! storage medium is the host's business: LocalStorage in the browser, a
//! plain file natively, memory in tests. Failures are recoverable by design:
//! callers fall back to the in-memory value and log a warning.

use thiserror::Error;

/// Why a read or write against durable storage failed
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("malformed stored high score: {0:?}")]
    Malformed(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// The persistence gateway: one durable integer
pub trait HighScoreStore {
    /// Read the stored high score; `Ok(None)` when nothing is stored yet
    fn read(&mut self) -> Result<Option<u64>, PersistError>;
    /// Durably store a new high score
    fn write(&mut self, score: u64) -> Result<(), PersistError>;
}

/// In-memory store for tests and as a last-resort fallback
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Option<u64>,
    /// Test hook: simulate a broken storage medium
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn with_value(value: Option<u64>) -> Self {
        Self {
            value,
            fail_writes: false,
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn read(&mut self) -> Result<Option<u64>, PersistError> {
        Ok(self.value)
    }

    fn write(&mut self, score: u64) -> Result<(), PersistError> {
        if self.fail_writes {
            return Err(PersistError::Unavailable);
        }
        self.value = Some(score);
        Ok(())
    }
}

/// File-backed store: the score as a decimal string in a single file
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HighScoreStore for FileStore {
    fn read(&mut self) -> Result<Option<u64>, PersistError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let trimmed = raw.trim();
        trimmed
            .parse::<u64>()
            .map(Some)
            .map_err(|_| PersistError::Malformed(trimmed.to_string()))
    }

    fn write(&mut self, score: u64) -> Result<(), PersistError> {
        std::fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

/// LocalStorage-backed store (browser)
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore {
    key: &'static str,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    const DEFAULT_KEY: &'static str = "bee_chase_high_score";

    pub fn new() -> Self {
        Self {
            key: Self::DEFAULT_KEY,
        }
    }

    fn storage() -> Result<web_sys::Storage, PersistError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(PersistError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn read(&mut self) -> Result<Option<u64>, PersistError> {
        let storage = Self::storage()?;
        let Some(raw) = storage
            .get_item(self.key)
            .map_err(|_| PersistError::Unavailable)?
        else {
            return Ok(None);
        };
        raw.trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| PersistError::Malformed(raw))
    }

    fn write(&mut self, score: u64) -> Result<(), PersistError> {
        let storage = Self::storage()?;
        storage
            .set_item(self.key, &score.to_string())
            .map_err(|_| PersistError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert!(store.read().unwrap().is_none());
        store.write(42).unwrap();
        assert_eq!(store.read().unwrap(), Some(42));
    }

    #[test]
    fn test_memory_store_write_failure() {
        let mut store = MemoryStore::default();
        store.fail_writes = true;
        assert!(store.write(7).is_err());
        assert!(store.read().unwrap().is_none());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join(format!("bee_chase_test_{}", std::process::id()));
        let mut store = FileStore::new(&path);
        assert!(store.read().unwrap().is_none());
        store.write(99).unwrap();
        assert_eq!(store.read().unwrap(), Some(99));
        let _ = std::fs::remove_file(&path);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store_malformed_value() {
        let path = std::env::temp_dir().join(format!("bee_chase_bad_{}", std::process::id()));
        std::fs::write(&path, "not a number").unwrap();
        let mut store = FileStore::new(&path);
        assert!(matches!(store.read(), Err(PersistError::Malformed(_))));
        let _ = std::fs::remove_file(&path);
    }
}
