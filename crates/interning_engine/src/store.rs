//! File-backed implementation of the dashboard's key-value storage.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use engine_logging::{engine_error, engine_info, engine_warn};
use interning_core::KeyValueStore;

use crate::persist::{AtomicFileWriter, PersistError};

pub const STORE_FILENAME: &str = "storage.json";

/// Key-value pairs held in memory and mirrored to `{dir}/storage.json`.
///
/// The file is read once on open and rewritten in full on every `set`.
/// Write failures are logged; the in-memory value still changes.
pub struct FileStore {
    entries: BTreeMap<String, String>,
    writer: AtomicFileWriter,
}

impl FileStore {
    /// Opens the store in `dir`. A missing or unreadable file yields an empty store.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let entries = load_entries(&dir.join(STORE_FILENAME));
        Self {
            entries,
            writer: AtomicFileWriter::new(dir),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.writer.dir().join(STORE_FILENAME)
    }

    fn save(&self) -> Result<PathBuf, PersistError> {
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|err| PersistError::Io(err.into()))?;
        self.writer.write(STORE_FILENAME, &content)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.save() {
            engine_error!("Failed to write {:?} to {:?}: {}", key, self.path(), err);
        }
    }
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return BTreeMap::new();
        }
        Err(err) => {
            engine_warn!("Failed to read stored settings from {:?}: {}", path, err);
            return BTreeMap::new();
        }
    };

    match serde_json::from_str::<BTreeMap<String, String>>(&content) {
        Ok(entries) => {
            engine_info!("Loaded {} stored entries from {:?}", entries.len(), path);
            entries
        }
        Err(err) => {
            engine_warn!("Failed to parse stored settings from {:?}: {}", path, err);
            BTreeMap::new()
        }
    }
}
