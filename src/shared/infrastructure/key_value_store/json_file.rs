// File backed implementation of the KeyValueStore port.
//
// Each key lives in `<dir>/<key>.json`. Writes land in a hidden temp file
// first and are renamed over the target, so a crash mid-write leaves the
// previous blob intact.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct JsonFileKeyValueStore {
    dir: PathBuf,
}

impl JsonFileKeyValueStore {
    /// Opens (and creates when missing) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, KeyValueStoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| KeyValueStoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, KeyValueStoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(KeyValueStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for JsonFileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(KeyValueStoreError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|source| KeyValueStoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| KeyValueStoreError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(key, bytes = value.len(), path = %path.display(), "blob written");
        Ok(())
    }
}
