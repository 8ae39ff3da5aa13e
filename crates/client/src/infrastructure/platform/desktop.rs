//! Desktop storage
//!
//! Key-value pairs persisted as one JSON file in the platform config
//! directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use directories::ProjectDirs;

use crate::ports::outbound::StorageProvider;

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/authortools/storage.json
/// - macOS: ~/Library/Application Support/app.authortools.client/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\authortools\client\config\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    storage_path: PathBuf,
    /// In-memory copy of the file
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn read_file(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("Failed to parse storage file: {}", e);
                HashMap::new()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read storage file: {}", e);
            HashMap::new()
        }
    }
}

impl DesktopStorageProvider {
    /// Storage in the platform config directory
    pub fn new() -> Self {
        let storage_path = match ProjectDirs::from("app", "authortools", "client") {
            Some(dirs) => dirs.config_dir().join("storage.json"),
            None => PathBuf::from("authortools_storage.json"),
        };
        Self::at(storage_path)
    }

    /// Storage backed by an explicit file
    pub fn at(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = read_file(&storage_path);
        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        let data = match self.cache.read() {
            Ok(guard) => serde_json::to_string_pretty(&*guard),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                return;
            }
        };

        match data {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to serialize storage data: {}", e),
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard);
                self.persist();
            }
            Err(e) => tracing::error!("Failed to acquire write lock for storage: {}", e),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                if guard.remove(key).is_none() {
                    return;
                }
                drop(guard);
                self.persist();
            }
            Err(e) => tracing::error!("Failed to acquire write lock for storage: {}", e),
        }
    }
}
