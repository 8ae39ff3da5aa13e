//! Raw API Port - Object-safe HTTP boundary
//!
//! The typed `ApiPort` trait is generic over response/request types which makes it
//! not object-safe. The composition root needs an abstraction that can be stored
//! behind `Arc<dyn ...>`, so adapters implement this JSON-in/JSON-out trait and the
//! application layer provides a typed wrapper on top (`application::api::Api`).
//!
//! Implementations attach the bearer credential to every request and map any
//! non-2xx status to `ApiError::Http`.

use serde_json::Value;

use super::ApiError;

/// A file part for multipart uploads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// Like `get_json`, but a 404 or an empty body yields `None`
    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn post_multipart(&self, path: &str, file: MultipartFile) -> Result<Value, ApiError>;

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn patch_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
