use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::Value;
use tracing::warn;

use super::KvStore;
use crate::error::{NavalhaError, NavalhaResult};

/// Persistent store backed by a single JSON object file.
///
/// The whole namespace is read once at `open` and rewritten on every
/// mutation. A missing file is an empty store; an unreadable or corrupt
/// file is logged and also treated as empty rather than raised, so a
/// damaged store degrades to first-run state instead of wedging every
/// caller.
///
/// Safe for concurrent use within one process. Not safe for two
/// processes pointed at the same file; last writer wins at file
/// granularity.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, Value>>,
}

impl FileStore {
    /// Open the store at `path`, loading any existing content.
    pub fn open(path: impl Into<PathBuf>) -> NavalhaResult<Self> {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<HashMap<String, Value>>(&bytes) {
                Ok(map) => map,
                Err(err) => {
                    warn!(path = %path.display(), %err, "store file is corrupt, starting empty");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, Value>) -> NavalhaResult<()> {
        let bytes = serde_json::to_vec_pretty(entries)?;
        fs::write(&self.path, bytes)
            .map_err(|e| NavalhaError::StoreSave(format!("{}: {e}", self.path.display())))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> NavalhaResult<Option<Value>> {
        Ok(self.entries.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> NavalhaResult<()> {
        let mut entries = self.entries.lock()?;
        let previous = entries.insert(key.to_string(), value);
        if let Err(err) = self.persist(&entries) {
            // Roll the in-memory state back so a failed write is not
            // visible to later reads.
            match previous {
                Some(v) => entries.insert(key.to_string(), v),
                None => entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> NavalhaResult<()> {
        let mut entries = self.entries.lock()?;
        let Some(previous) = entries.remove(key) else {
            return Ok(());
        };
        if let Err(err) = self.persist(&entries) {
            entries.insert(key.to_string(), previous);
            return Err(err);
        }
        Ok(())
    }
}
