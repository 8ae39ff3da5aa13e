//! Typed API port
//!
//! `ApiPort` is the typed counterpart of `RawApiPort`: request bodies are any
//! `Serialize` value and responses decode into any `DeserializeOwned` type.
//! Because its methods are generic it cannot be used as a trait object.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors raised at the HTTP boundary
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The identity provider could not supply a bearer token
    #[error("Not authenticated: {0}")]
    Unauthorized(String),

    /// The server answered outside the 2xx range
    #[error("Server responded with {status}: {message}")]
    Http {
        status: u16,
        /// Machine-readable error code from the response body, if any
        code: Option<String>,
        message: String,
    },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server error code carried in the response body
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Http { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[async_trait::async_trait]
pub trait ApiPort: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError>;

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn put<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn patch_no_response<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
