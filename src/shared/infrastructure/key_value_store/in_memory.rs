// In memory implementation of the KeyValueStore port.
//
// Purpose
// - Support store and handler tests and local development without touching disk.
//
// Responsibilities
// - Keep blobs in a map keyed by name.
// - Simulate an unreachable backend through `toggle_offline`.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), KeyValueStoreError> {
        if self.is_offline {
            return Err(KeyValueStoreError::Backend("Key-value store offline".into()));
        }
        Ok(())
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        self.ensure_online()?;
        let guard = self
            .entries
            .read()
            .map_err(|_| KeyValueStoreError::Backend("lock poisoned".into()))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        self.ensure_online()?;
        let mut guard = self
            .entries
            .write()
            .map_err(|_| KeyValueStoreError::Backend("lock poisoned".into()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
