//! Identity Port - bearer credentials from the external identity provider
//!
//! Authentication itself happens elsewhere; the client only asks for a token
//! before each request so that refreshed tokens are picked up transparently.

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait IdentityPort: Send + Sync {
    /// Fetch a currently valid access token
    async fn access_token(&self) -> Result<String, ApiError>;

    /// Stable identifier of the signed-in user (used to scope local storage)
    fn user_id(&self) -> String;
}
