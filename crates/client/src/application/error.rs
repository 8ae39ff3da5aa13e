//! Service layer error types
//!
//! This module defines errors that can occur in the application layer,
//! wrapping transport errors (`ApiError`) and local invariant violations
//! (`DomainError`).

use authortools_domain::DomainError;
use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Text shown for any failure without a dedicated message
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Errors that can occur in service operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Transport or server failure
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A local document did not contain the referenced id
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The workspace still owns characters, creatures or locations
    #[error("Workspace still has associated data")]
    WorkspaceHasEntities,

    /// The user's only workspace cannot be removed
    #[error("Cannot delete the last workspace")]
    LastWorkspace,

    /// A fetch was superseded or aborted before it completed
    #[error("Request was cancelled")]
    Cancelled,
}

impl ServiceError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Local invariant violations are programming errors, not user-facing failures
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Api(e) => e.is_not_found(),
            Self::Domain(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Message suitable for a toast
    pub fn user_message(&self) -> String {
        match self {
            Self::WorkspaceHasEntities => {
                "This workspace still contains characters, creatures or locations. \
                 Move or delete them before deleting the workspace."
                    .to_string()
            }
            Self::LastWorkspace => {
                "You cannot delete your last workspace. Create another one first.".to_string()
            }
            _ => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }
}
