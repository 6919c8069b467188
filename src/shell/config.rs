use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::modules::inventory::adapters::outbound::inventory_store::InventoryStore;
use crate::shared::infrastructure::key_value_store::{
    KeyValueStore, KeyValueStoreError, in_memory::InMemoryKeyValueStore,
    json_file::JsonFileKeyValueStore,
};

pub const BIND_ADDR_VAR: &str = "INVENTORY_BIND_ADDR";
pub const DATA_DIR_VAR: &str = "INVENTORY_DATA_DIR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("INVENTORY_BIND_ADDR is not a socket address: {0}")]
    InvalidBindAddr(String),
    #[error(transparent)]
    Backend(#[from] KeyValueStoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` keeps everything in memory for the lifetime of the process.
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr.clone()))?;
        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            data_dir,
        })
    }

    pub fn build_store(&self) -> Result<InventoryStore, ConfigError> {
        let backend: Arc<dyn KeyValueStore> = match &self.data_dir {
            Some(dir) => {
                info!(dir = %dir.display(), "using json file store");
                Arc::new(JsonFileKeyValueStore::open(dir)?)
            }
            None => {
                info!("using in-memory store, data is lost on exit");
                Arc::new(InMemoryKeyValueStore::new())
            }
        };
        Ok(InventoryStore::new(backend))
    }
}
