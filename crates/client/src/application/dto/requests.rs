//! Application-layer request DTOs
//!
//! Bodies for create calls, where the server assigns the id. Replace calls
//! send the full domain document instead.

use serde::{Deserialize, Serialize};

use authortools_domain::{DetailSection, Entity, FileId, Theme, Workspace, WorkspaceId};

/// Body for `POST /{entityType}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntityRequest {
    pub name: String,
    pub image_file_id: Option<FileId>,
    pub workspace_id: WorkspaceId,
    pub order: u32,
    pub detail_sections: Vec<DetailSection>,
}

impl CreateEntityRequest {
    /// New entity appended after `existing` siblings
    pub fn new(workspace_id: WorkspaceId, name: impl Into<String>, existing: usize) -> Self {
        Self {
            name: name.into(),
            image_file_id: None,
            workspace_id,
            order: existing as u32 + 1,
            detail_sections: Vec::new(),
        }
    }

    pub fn with_image(mut self, file_id: FileId) -> Self {
        self.image_file_id = Some(file_id);
        self
    }
}

impl From<&Entity> for CreateEntityRequest {
    fn from(entity: &Entity) -> Self {
        Self {
            name: entity.name.clone(),
            image_file_id: entity.image_file_id.clone(),
            workspace_id: entity.workspace_id.clone(),
            order: entity.order,
            detail_sections: entity.detail_sections.clone(),
        }
    }
}

/// Body for `POST /workspace` and `PUT /workspace/{id}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRequest {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub is_default: bool,
}

impl From<&Workspace> for WorkspaceRequest {
    fn from(workspace: &Workspace) -> Self {
        Self {
            name: workspace.name.clone(),
            description: workspace.description.clone(),
            icon: workspace.icon.clone(),
            is_default: workspace.is_default,
        }
    }
}

/// Body for `POST /user-settings`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserSettingRequest {
    pub theme: Theme,
}

/// Response of `POST /file`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: FileId,
}
