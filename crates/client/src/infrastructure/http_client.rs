//! HTTP adapter for the Tools for Authors REST API
//!
//! Implements `RawApiPort` with reqwest. A bearer token is requested from
//! the identity port before every call so refreshed tokens are picked up
//! without rebuilding the client. Nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;

use crate::ports::outbound::{ApiError, IdentityPort, MultipartFile, RawApiPort};

/// Form field the server reads uploads from
const UPLOAD_FIELD: &str = "file";

#[derive(Clone)]
pub struct HttpApiAdapter {
    client: Client,
    base_url: String,
    identity: Arc<dyn IdentityPort>,
}

impl HttpApiAdapter {
    pub fn new(
        base_url: &str,
        identity: Arc<dyn IdentityPort>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!(error = %e, "Failed to build HTTP client");
            ApiError::RequestFailed(format!("HTTP client unavailable: {}", e))
        })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            identity,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach credentials, send, and turn non-2xx answers into errors
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let token = self.identity.access_token().await?;
        let response = request
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = error_from_body(status, &body);
        tracing::warn!(status = status.as_u16(), error = %error, "API request rejected");
        Err(error)
    }
}

/// Build an `ApiError` from a rejected response.
///
/// Bodies may be a JSON object with `code`/`errorCode` and `message`, a bare
/// JSON string holding the code, or plain text.
pub(crate) fn error_from_body(status: StatusCode, body: &str) -> ApiError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    let code = parsed.as_ref().and_then(|json| match json {
        Value::String(code) => Some(code.clone()),
        Value::Object(map) => map
            .get("code")
            .or_else(|| map.get("errorCode"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    });

    let message = parsed
        .as_ref()
        .and_then(|json| json.get("message").or_else(|| json.get("title")))
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    if status == StatusCode::UNAUTHORIZED {
        return ApiError::Unauthorized(message);
    }

    ApiError::Http {
        status: status.as_u16(),
        code,
        message,
    }
}

/// Response body as JSON; an empty body reads as `null`
async fn read_json(response: Response) -> Result<Value, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
    parse_body(&text)
}

fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::ParseError(e.to_string()))
}

#[async_trait]
impl RawApiPort for HttpApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        tracing::debug!(path, "GET");
        let response = self.send(self.client.get(self.url(path))).await?;
        read_json(response).await
    }

    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        tracing::debug!(path, "GET (optional)");
        match self.send(self.client.get(self.url(path))).await {
            Ok(response) => match read_json(response).await? {
                Value::Null => Ok(None),
                value => Ok(Some(value)),
            },
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        tracing::debug!(path, "POST");
        let response = self.send(self.client.post(self.url(path)).json(body)).await?;
        read_json(response).await
    }

    async fn post_multipart(&self, path: &str, file: MultipartFile) -> Result<Value, ApiError> {
        tracing::debug!(path, file_name = %file.file_name, "POST multipart");
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self.send(self.client.post(self.url(path)).multipart(form)).await?;
        read_json(response).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        tracing::debug!(path, "PUT");
        let response = self.send(self.client.put(self.url(path)).json(body)).await?;
        read_json(response).await
    }

    async fn patch_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        tracing::debug!(path, "PATCH");
        self.send(self.client.patch(self.url(path)).json(body)).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        tracing::debug!(path, "DELETE");
        self.send(self.client.delete(self.url(path))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockIdentityPort;

    #[test]
    fn error_code_is_read_from_json_object() {
        let error = error_from_body(
            StatusCode::BAD_REQUEST,
            r#"{"code":"IsLastWorkspace","message":"Cannot delete"}"#,
        );

        assert_eq!(error.code(), Some("IsLastWorkspace"));
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn error_code_falls_back_to_error_code_field_and_bare_string() {
        let from_field = error_from_body(
            StatusCode::CONFLICT,
            r#"{"errorCode":"AssociatedDataExists"}"#,
        );
        let from_string = error_from_body(StatusCode::CONFLICT, r#""AssociatedDataExists""#);

        assert_eq!(from_field.code(), Some("AssociatedDataExists"));
        assert_eq!(from_string.code(), Some("AssociatedDataExists"));
    }

    #[test]
    fn plain_text_bodies_become_the_message() {
        let error = error_from_body(StatusCode::INTERNAL_SERVER_ERROR, "boom");

        assert_eq!(
            error,
            ApiError::Http {
                status: 500,
                code: None,
                message: "boom".into(),
            }
        );
    }

    #[test]
    fn empty_not_found_is_still_not_found() {
        let error = error_from_body(StatusCode::NOT_FOUND, "");
        assert!(error.is_not_found());
    }

    #[test]
    fn unauthorized_has_its_own_variant() {
        let error = error_from_body(StatusCode::UNAUTHORIZED, "");
        assert!(matches!(error, ApiError::Unauthorized(_)));
    }

    #[test]
    fn empty_body_parses_as_null() {
        assert_eq!(parse_body("  ").unwrap(), Value::Null);
        assert!(matches!(parse_body("{oops"), Err(ApiError::ParseError(_))));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let adapter = HttpApiAdapter::new(
            "http://localhost:5000/api/",
            Arc::new(MockIdentityPort::new()),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(adapter.url("/workspace"), "http://localhost:5000/api/workspace");
    }

    #[tokio::test]
    async fn missing_token_fails_before_sending() {
        let mut identity = MockIdentityPort::new();
        identity
            .expect_access_token()
            .times(1)
            .returning(|| Err(ApiError::Unauthorized("signed out".into())));

        let adapter = HttpApiAdapter::new(
            "http://127.0.0.1:9",
            Arc::new(identity),
            Duration::from_millis(50),
        )
        .unwrap();
        let err = adapter.get_json("/workspace").await.unwrap_err();

        assert_eq!(err, ApiError::Unauthorized("signed out".into()));
    }
}
