// Key-value port for the persisted collections.
//
// Responsibilities
// - Describe the blob medium the inventory store writes through.
// - Keep the store independent of where the blobs live (memory, files).
//
// Adapters implement this trait; the store receives one at construction.

pub mod in_memory;
pub mod json_file;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when nothing was ever written under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;
}
