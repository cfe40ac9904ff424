use std::sync::Arc;

use crate::ports::KeyValueStore;

/// Storage key of the bearer credential.
pub const CREDENTIAL_KEY: &str = "jwt";

/// Typed wrapper over the persistent store for the bearer credential.
///
/// The credential is the only cross-view shared mutable state; only
/// the session service writes through this wrapper, every other
/// component reads.
#[derive(Clone)]
pub struct TokenStore {
    store: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    /// Creates a token store over the given key-value backend.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the stored credential, if any.
    #[must_use]
    pub fn credential(&self) -> Option<String> {
        self.store.get(CREDENTIAL_KEY)
    }

    /// Stores a freshly issued credential.
    pub fn save_credential(&self, credential: &str) {
        self.store.put(CREDENTIAL_KEY, credential);
    }

    /// Removes the stored credential.
    pub fn clear_credential(&self) {
        self.store.remove(CREDENTIAL_KEY);
    }

    /// Returns true when a credential is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credential().is_some()
    }
}
