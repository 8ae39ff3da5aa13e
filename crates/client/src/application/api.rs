//! Typed API wrapper for application services.
//!
//! `Api` wraps an `Arc<dyn RawApiPort>` and implements the typed `ApiPort`
//! interface via serde_json conversions, so services never touch adapter
//! types and tests can substitute a mocked raw port.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::ports::outbound::{ApiError, ApiPort, MultipartFile, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    /// Multipart upload with a typed response
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file: MultipartFile,
    ) -> Result<T, ApiError> {
        let value = self.raw.post_multipart(path, file).await?;
        decode(value)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
}

#[async_trait::async_trait]
impl ApiPort for Api {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        decode(value)
    }

    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        match self.raw.get_optional_json(path).await? {
            None => Ok(None),
            Some(value) => decode(value).map(Some),
        }
    }

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value = encode(body)?;
        let value = self.raw.post_json(path, &body_value).await?;
        decode(value)
    }

    async fn put<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value = encode(body)?;
        let value = self.raw.put_json(path, &body_value).await?;
        decode(value)
    }

    async fn patch_no_response<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let body_value = encode(body)?;
        self.raw.patch_no_response_json(path, &body_value).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.raw.delete(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[tokio::test]
    async fn get_decodes_json() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == "/workspace/w1")
            .returning(|_| Ok(serde_json::json!({ "name": "Saga" })));

        let api = Api::new(Arc::new(raw));
        let named: Named = api.get("/workspace/w1").await.unwrap();

        assert_eq!(named.name, "Saga");
    }

    #[tokio::test]
    async fn shape_mismatch_is_a_parse_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|_| Ok(serde_json::json!([1, 2, 3])));

        let api = Api::new(Arc::new(raw));
        let err = api.get::<Named>("/anything").await.unwrap_err();

        assert!(matches!(err, ApiError::ParseError(_)));
    }

    #[tokio::test]
    async fn missing_optional_resource_is_none() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_optional_json().returning(|_| Ok(None));

        let api = Api::new(Arc::new(raw));
        let found: Option<Named> = api.get_optional("/user-settings").await.unwrap();

        assert!(found.is_none());
    }
}
