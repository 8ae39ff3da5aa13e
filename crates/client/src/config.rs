//! Client configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_USER_ID: &str = "local-user";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Client configuration loaded from environment
#[derive(Clone)]
pub struct ClientConfig {
    /// REST API root, without trailing slash
    pub api_url: String,
    /// Bearer token issued by the identity provider
    pub access_token: Option<String>,
    /// Scopes locally persisted state
    pub user_id: String,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("user_id", &self.user_id)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("AUTHORTOOLS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Url::parse(&api_url)
            .with_context(|| format!("AUTHORTOOLS_API_URL is not a valid URL: {}", api_url))?;

        let request_timeout_ms = match lookup("AUTHORTOOLS_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("AUTHORTOOLS_REQUEST_TIMEOUT_MS must be a number of milliseconds")?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            access_token: lookup("AUTHORTOOLS_ACCESS_TOKEN").filter(|t| !t.trim().is_empty()),
            user_id: lookup("AUTHORTOOLS_USER_ID").unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
            request_timeout: Duration::from_millis(request_timeout_ms),
        })
    }

    pub fn require_access_token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .context("AUTHORTOOLS_ACCESS_TOKEN environment variable is required")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ClientConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).unwrap();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.user_id, DEFAULT_USER_ID);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.require_access_token().is_err());
    }

    #[test]
    fn values_are_read_and_normalised() {
        let config = config(&[
            ("AUTHORTOOLS_API_URL", "https://authors.example.com/api/"),
            ("AUTHORTOOLS_ACCESS_TOKEN", "t0k3n"),
            ("AUTHORTOOLS_REQUEST_TIMEOUT_MS", "1500"),
        ])
        .unwrap();

        assert_eq!(config.api_url, "https://authors.example.com/api");
        assert_eq!(config.require_access_token().unwrap(), "t0k3n");
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
        assert!(!format!("{:?}", config).contains("t0k3n"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config(&[("AUTHORTOOLS_API_URL", "not a url")]).is_err());
        assert!(config(&[("AUTHORTOOLS_REQUEST_TIMEOUT_MS", "soon")]).is_err());
    }
}
