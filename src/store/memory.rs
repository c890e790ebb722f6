use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::store::backend::KeyValueStore;
use crate::store::error::StoreError;

/// Process-local backend, used by tests and by embedders without a platform store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the map lock with proper error handling
    fn lock_values(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.values.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Snapshot of every stored key, sorted
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let values = self.lock_values()?;
        let mut keys: Vec<String> = values.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock_values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        debug!("Setting {}", key);
        self.lock_values()?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        debug!("Deleting {}", key);
        self.lock_values()?.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.lock_values()?.contains_key(key))
    }
}
