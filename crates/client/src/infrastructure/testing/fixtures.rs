//! Simple test fixtures used across unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::ports::outbound::{ApiError, StorageProvider};

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

/// Wire form of an entity without detail sections
pub fn entity_json(id: &str, workspace_id: &str, order: u32) -> Value {
    serde_json::json!({
        "id": id,
        "name": id.to_uppercase(),
        "imageFileId": null,
        "workspaceId": workspace_id,
        "order": order,
        "detailSections": []
    })
}

/// Process-local `StorageProvider`
#[derive(Default)]
pub struct InMemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl StorageProvider for InMemoryStorage {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}
