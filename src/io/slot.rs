use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Error type for persistence slot writes. Reads never error: a missing or
/// unreadable key simply reads as absent.
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("could not create data dir {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A durable string-valued key-value slot. Small on purpose: the store only
/// needs get/set, and tests swap in [`MemorySlot`].
pub trait StateSlot {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SlotError>;
}

/// Production slot: one `<key>.json` file per key inside the data directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// No I/O happens here; the directory is created on first write.
    pub fn new(dir: PathBuf) -> Self {
        FileSlot { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StateSlot for FileSlot {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SlotError> {
        fs::create_dir_all(&self.dir).map_err(|e| SlotError::CreateDir {
            path: self.dir.clone(),
            source: e,
        })?;
        let path = self.key_path(key);
        atomic_write(&path, value.as_bytes()).map_err(|e| SlotError::Write { path, source: e })
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// In-memory slot for unit tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: HashMap<String, String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        MemorySlot::default()
    }
}

impl StateSlot for MemorySlot {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SlotError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Default data directory: `~/.tick`, falling back to `./.tick` when no home
/// directory can be determined.
#[allow(deprecated)]
pub fn default_data_dir() -> PathBuf {
    std::env::home_dir()
        .map(|home| home.join(".tick"))
        .unwrap_or_else(|| PathBuf::from(".tick"))
}

/// Resolve the data directory from the `-C` flag, or the default.
pub fn resolve_data_dir(flag: Option<&str>) -> PathBuf {
    match flag {
        Some(dir) => PathBuf::from(dir),
        None => default_data_dir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_then_get_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut slot = FileSlot::new(dir.path().to_path_buf());
        slot.set("todos", "[]").unwrap();
        assert_eq!(slot.get("todos").as_deref(), Some("[]"));
    }

    #[test]
    fn get_missing_key_returns_none() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path().to_path_buf());
        assert!(slot.get("todos").is_none());
    }

    #[test]
    fn set_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deeper").join("still");
        let mut slot = FileSlot::new(nested.clone());
        slot.set("darkMode", "true").unwrap();
        assert_eq!(
            fs::read_to_string(nested.join("darkMode.json")).unwrap(),
            "true"
        );
    }

    #[test]
    fn set_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let mut slot = FileSlot::new(dir.path().to_path_buf());
        slot.set("todos", "[1]").unwrap();
        slot.set("todos", "[2]").unwrap();
        assert_eq!(slot.get("todos").as_deref(), Some("[2]"));
    }

    #[test]
    fn keys_map_to_separate_files() {
        let dir = TempDir::new().unwrap();
        let mut slot = FileSlot::new(dir.path().to_path_buf());
        slot.set("todos", "[]").unwrap();
        slot.set("darkMode", "false").unwrap();
        assert!(dir.path().join("todos.json").exists());
        assert!(dir.path().join("darkMode.json").exists());
    }

    #[test]
    fn memory_slot_round_trip() {
        let mut slot = MemorySlot::new();
        assert!(slot.get("todos").is_none());
        slot.set("todos", "[]").unwrap();
        assert_eq!(slot.get("todos").as_deref(), Some("[]"));
    }

    #[test]
    fn resolve_data_dir_prefers_flag() {
        assert_eq!(resolve_data_dir(Some("/tmp/x")), PathBuf::from("/tmp/x"));
        assert!(resolve_data_dir(None).ends_with(".tick"));
    }
}
