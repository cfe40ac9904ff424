use std::collections::HashMap;
use std::sync::Mutex;

use asista_application::ports::KeyValueStore;

/// Process-local key-value store; state vanishes with the process.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use asista_application::ports::KeyValueStore;

    use super::InMemoryKeyValueStore;

    #[test]
    fn values_roundtrip_and_remove() {
        let store = InMemoryKeyValueStore::new();

        store.put("jwt", "abc");
        assert_eq!(store.get("jwt").as_deref(), Some("abc"));

        store.remove("jwt");
        assert_eq!(store.get("jwt"), None);
    }
}
