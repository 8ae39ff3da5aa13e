//! Platform abstraction ports
//!
//! Persistent key-value storage (browser localStorage, a JSON file on
//! desktop) is hidden behind `StorageProvider` so application code and tests
//! stay platform-agnostic.

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key constants
pub mod storage_keys {
    /// Prefix of the per-user "last active workspace" key
    pub const ACTIVE_WORKSPACE: &str = "authortools_active_workspace";

    /// Key holding the last active workspace id for `user_id`
    pub fn active_workspace(user_id: &str) -> String {
        format!("{}:{}", ACTIVE_WORKSPACE, user_id)
    }
}
