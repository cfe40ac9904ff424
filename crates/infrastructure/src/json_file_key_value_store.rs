use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use asista_application::ports::KeyValueStore;
use tracing::warn;

/// Key-value store persisted as a single JSON file.
///
/// Stands in for browser local storage: reads hit an in-process map,
/// every write rewrites the file. Writes are best-effort per the port
/// contract, so an I/O failure logs a warning and keeps the in-memory
/// state.
pub struct JsonFileKeyValueStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl JsonFileKeyValueStore {
    /// Opens the store, loading existing content when the file parses.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = std::fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    fn persist(&self, values: &HashMap<String, String>) {
        let serialized = match serde_json::to_string_pretty(values) {
            Ok(serialized) => serialized,
            Err(error) => {
                warn!(%error, "failed to serialize local storage state");
                return;
            }
        };
        if let Err(error) = std::fs::write(&self.path, serialized) {
            warn!(%error, path = %self.path.display(), "failed to persist local storage state");
        }
    }
}

impl KeyValueStore for JsonFileKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
            self.persist(&values);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
            self.persist(&values);
        }
    }
}
