// Inventory store: the three persisted collections over a key-value medium.
//
// Responsibilities
// - Read each collection whole, falling back to seed data when the key is
//   absent or its value does not parse.
// - Write each collection whole after applying the upsert / append rule.
// - Surface every write failure to the caller, and refuse to write over a
//   stored value that could not be read.
//
// Boundaries
// - No cross-entity rules here. Keeping an asset in sync with its movements
//   belongs to the record_movement use case.

use crate::modules::inventory::core::asset::Asset;
use crate::modules::inventory::core::department::Department;
use crate::modules::inventory::core::movement::Movement;
use crate::modules::inventory::core::seed::{seed_assets, seed_departments, seed_movements};
use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

pub const ASSETS_KEY: &str = "assets";
pub const DEPARTMENTS_KEY: &str = "departments";
pub const MOVEMENTS_KEY: &str = "movements";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Backend(#[from] KeyValueStoreError),

    #[error("failed to serialize {key}: {source}")]
    Serialization {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("department {0} already exists")]
    DuplicateDepartment(String),

    #[error("stored {key} is unreadable, refusing to overwrite it: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

enum Loaded<T> {
    Absent,
    Stored(Vec<T>),
    Unreadable(serde_json::Error),
}

#[derive(Clone)]
pub struct InventoryStore {
    backend: Arc<dyn KeyValueStore>,
}

impl InventoryStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Assets in insertion order.
    pub fn list_assets(&self) -> Result<Vec<Asset>, StoreError> {
        self.read_collection(ASSETS_KEY, seed_assets)
    }

    pub fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        self.read_collection(DEPARTMENTS_KEY, seed_departments)
    }

    /// Movements in append order, oldest first.
    pub fn list_movements(&self) -> Result<Vec<Movement>, StoreError> {
        self.read_collection(MOVEMENTS_KEY, seed_movements)
    }

    pub fn find_asset(&self, asset_id: &str) -> Result<Option<Asset>, StoreError> {
        Ok(self
            .list_assets()?
            .into_iter()
            .find(|asset| asset.id == asset_id))
    }

    /// Replace the asset with the same id in place, or append it.
    pub fn save_asset(&self, asset: Asset) -> Result<(), StoreError> {
        let mut assets = self.read_for_write(ASSETS_KEY, seed_assets)?;
        match assets.iter_mut().find(|existing| existing.id == asset.id) {
            Some(existing) => {
                debug!(asset_id = %asset.id, "replacing asset");
                *existing = asset;
            }
            None => {
                debug!(asset_id = %asset.id, "appending asset");
                assets.push(asset);
            }
        }
        self.write_collection(ASSETS_KEY, &assets)
    }

    /// Append a department. Ids are unique, a second save with the same id
    /// is rejected rather than duplicated.
    pub fn save_department(&self, department: Department) -> Result<(), StoreError> {
        let mut departments = self.read_for_write(DEPARTMENTS_KEY, seed_departments)?;
        if departments.iter().any(|existing| existing.id == department.id) {
            return Err(StoreError::DuplicateDepartment(department.id));
        }
        departments.push(department);
        self.write_collection(DEPARTMENTS_KEY, &departments)
    }

    pub fn save_movement(&self, movement: Movement) -> Result<(), StoreError> {
        let mut movements = self.read_for_write(MOVEMENTS_KEY, seed_movements)?;
        movements.push(movement);
        self.write_collection(MOVEMENTS_KEY, &movements)
    }

    fn load_collection<T: DeserializeOwned>(
        &self,
        key: &'static str,
    ) -> Result<Loaded<T>, StoreError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(Loaded::Absent);
        };
        if raw.trim().is_empty() {
            return Ok(Loaded::Absent);
        }
        Ok(match serde_json::from_str::<Option<Vec<T>>>(&raw) {
            Ok(Some(items)) => Loaded::Stored(items),
            Ok(None) => Loaded::Absent,
            Err(error) => Loaded::Unreadable(error),
        })
    }

    fn read_collection<T: DeserializeOwned>(
        &self,
        key: &'static str,
        seed: fn() -> Vec<T>,
    ) -> Result<Vec<T>, StoreError> {
        match self.load_collection(key)? {
            Loaded::Stored(items) => Ok(items),
            Loaded::Absent => Ok(seed()),
            Loaded::Unreadable(error) => {
                warn!(key, %error, "unreadable collection, serving seed data");
                Ok(seed())
            }
        }
    }

    /// Like `read_collection`, but an unreadable stored value is an error:
    /// writing seed data over it would destroy the records it holds.
    fn read_for_write<T: DeserializeOwned>(
        &self,
        key: &'static str,
        seed: fn() -> Vec<T>,
    ) -> Result<Vec<T>, StoreError> {
        match self.load_collection(key)? {
            Loaded::Stored(items) => Ok(items),
            Loaded::Absent => Ok(seed()),
            Loaded::Unreadable(source) => Err(StoreError::Corrupt { key, source }),
        }
    }

    fn write_collection<T: Serialize>(
        &self,
        key: &'static str,
        items: &[T],
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items)
            .map_err(|source| StoreError::Serialization { key, source })?;
        self.backend.set(key, &raw)?;
        debug!(key, count = items.len(), "collection written");
        Ok(())
    }
}
