use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use super::KvStore;
use crate::error::NavalhaResult;

/// In-memory store. Useful for tests and for consumers that want an
/// ephemeral workspace with the exact semantics of the persistent one.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> NavalhaResult<Option<Value>> {
        Ok(self.entries.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> NavalhaResult<()> {
        self.entries.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> NavalhaResult<()> {
        self.entries.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("users").unwrap(), None);

        store.set("users", json!([{"id": "admin-1"}])).unwrap();
        assert_eq!(store.get("users").unwrap(), Some(json!([{"id": "admin-1"}])));

        store.remove("users").unwrap();
        assert_eq!(store.get("users").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let store = MemoryStore::new();
        store.remove("never-set").unwrap();
        store.remove("never-set").unwrap();
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set("theme", json!("gold")).unwrap();
        store.set("theme", json!("graphite")).unwrap();
        assert_eq!(store.get("theme").unwrap(), Some(json!("graphite")));
    }
}
