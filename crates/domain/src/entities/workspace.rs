//! Workspace entity - the scope that partitions a user's entities

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::WorkspaceId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Icon name understood by the UI icon set
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub is_default: bool,
}

impl Workspace {
    pub fn new(id: impl Into<WorkspaceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            is_default: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("Workspace name cannot be empty"));
        }
        Ok(())
    }
}

/// Pick the workspace to activate after the list loads.
///
/// Preference: the previously active id if it still exists, then the
/// default workspace, then the first one.
pub fn resolve_active_workspace<'a>(
    workspaces: &'a [Workspace],
    preferred: Option<&WorkspaceId>,
) -> Option<&'a Workspace> {
    preferred
        .and_then(|id| workspaces.iter().find(|w| &w.id == id))
        .or_else(|| workspaces.iter().find(|w| w.is_default))
        .or_else(|| workspaces.first())
}
