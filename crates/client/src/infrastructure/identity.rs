//! Identity adapter backed by a pre-issued access token
//!
//! Sign-in happens in the external identity provider; the binary receives
//! the resulting token through configuration.

use async_trait::async_trait;

use crate::ports::outbound::{ApiError, IdentityPort};

#[derive(Clone)]
pub struct StaticTokenIdentity {
    token: String,
    user_id: String,
}

impl StaticTokenIdentity {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
        }
    }
}

impl std::fmt::Debug for StaticTokenIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenIdentity")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl IdentityPort for StaticTokenIdentity {
    async fn access_token(&self) -> Result<String, ApiError> {
        if self.token.trim().is_empty() {
            return Err(ApiError::Unauthorized("No access token configured".into()));
        }
        Ok(self.token.clone())
    }

    fn user_id(&self) -> String {
        self.user_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_token_is_unauthorized() {
        let identity = StaticTokenIdentity::new("", "u1");
        assert!(matches!(
            identity.access_token().await,
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn debug_output_hides_the_token() {
        let identity = StaticTokenIdentity::new("secret-token", "u1");
        assert!(!format!("{:?}", identity).contains("secret-token"));
    }
}
