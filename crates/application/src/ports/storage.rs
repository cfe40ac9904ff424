/// Persistent key-value store with browser-local-storage semantics.
///
/// Writes are best-effort and never fail the caller; implementations
/// log and swallow their own I/O problems.
pub trait KeyValueStore: Send + Sync {
    /// Reads a value, if present.
    fn get(&self, key: &str) -> Option<String>;
    /// Writes or replaces a value.
    fn put(&self, key: &str, value: &str);
    /// Removes a value, if present.
    fn remove(&self, key: &str);
}
