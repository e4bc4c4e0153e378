//! In-memory store adapter
//!
//! HashMap stand-in satisfying the same read/write/remove contract as the
//! durable store. Used to unit-test cart and recorder logic without
//! touching disk, and to inject raw (possibly corrupt) values.

use super::{StoreAdapter, StoreResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Volatile key-value store for tests and in-memory-only sessions
#[derive(Clone, Default)]
pub struct MemoryStore {
    map: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert raw bytes without JSON encoding
    ///
    /// Lets tests plant undecodable values to exercise the fallback path.
    pub fn insert_raw(&self, key: &str, value: Vec<u8>) {
        self.lock().insert(key.to_string(), value);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A poisoned lock only means another test thread panicked mid-write;
        // the map itself is still usable.
        self.map.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StoreAdapter for MemoryStore {
    fn read_bytes(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.lock().get(key).cloned())
    }

    fn write_bytes(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        self.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.lock().remove(key);
        Ok(())
    }
}
