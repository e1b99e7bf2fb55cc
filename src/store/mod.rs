//! Flat string-keyed key-value backends.
//!
//! The repository layer is the only intended caller; keys are partitioned
//! by entity type and scope (`clients:{barbershopId}` and the like) so
//! collections never collide.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::NavalhaResult;

/// Synchronous key-value namespace holding JSON values.
///
/// Implementations can keep the data in memory or on disk; either way
/// every operation completes before returning and there is no
/// cross-operation atomicity beyond what the caller arranges.
pub trait KvStore: Send + Sync {
    /// Read the value stored for `key`, if any.
    fn get(&self, key: &str) -> NavalhaResult<Option<serde_json::Value>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: serde_json::Value) -> NavalhaResult<()>;

    /// Remove `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str) -> NavalhaResult<()>;

    /// Check whether `key` holds a value.
    fn contains(&self, key: &str) -> NavalhaResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contains_default_method() {
        let store = MemoryStore::new();
        assert!(!store.contains("initialized").unwrap());
        store.set("initialized", json!(true)).unwrap();
        assert!(store.contains("initialized").unwrap());
    }
}
