//! Workspace Service - REST gateway for workspaces
//!
//! Deleting a workspace is the one call with a differentiated error
//! taxonomy: the server refuses with a dedicated code when the workspace
//! still owns entities or when it is the user's last workspace.

use authortools_domain::{Workspace, WorkspaceId};

use crate::application::api::Api;
use crate::application::dto::WorkspaceRequest;
use crate::application::ServiceError;
use crate::ports::outbound::{ApiError, ApiPort};

/// Server code: the workspace still has characters, creatures or locations
pub const ASSOCIATED_DATA_EXISTS: &str = "AssociatedDataExists";
/// Server code: the workspace is the user's only one
pub const IS_LAST_WORKSPACE: &str = "IsLastWorkspace";

const WORKSPACE_PATH: &str = "/workspace";

#[derive(Clone)]
pub struct WorkspaceService {
    api: Api,
}

fn item_path(id: &WorkspaceId) -> String {
    format!("{}/{}", WORKSPACE_PATH, id)
}

/// Translate a failed delete into the user-facing taxonomy
fn map_delete_error(error: ApiError) -> ServiceError {
    match error.code() {
        Some(ASSOCIATED_DATA_EXISTS) => ServiceError::WorkspaceHasEntities,
        Some(IS_LAST_WORKSPACE) => ServiceError::LastWorkspace,
        _ => ServiceError::Api(error),
    }
}

impl WorkspaceService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// List the signed-in user's workspaces
    pub async fn list(&self) -> Result<Vec<Workspace>, ServiceError> {
        Ok(self.api.get(WORKSPACE_PATH).await?)
    }

    pub async fn get(&self, id: &WorkspaceId) -> Result<Workspace, ServiceError> {
        Ok(self.api.get(&item_path(id)).await?)
    }

    pub async fn create(&self, request: &WorkspaceRequest) -> Result<Workspace, ServiceError> {
        Ok(self.api.post(WORKSPACE_PATH, request).await?)
    }

    pub async fn update(
        &self,
        id: &WorkspaceId,
        request: &WorkspaceRequest,
    ) -> Result<Workspace, ServiceError> {
        Ok(self.api.put(&item_path(id), request).await?)
    }

    /// Delete a workspace
    ///
    /// # Errors
    /// * `ServiceError::WorkspaceHasEntities` - entities still reference it
    /// * `ServiceError::LastWorkspace` - it is the only workspace left
    /// * `ServiceError::Api` - anything else
    pub async fn delete(&self, id: &WorkspaceId) -> Result<(), ServiceError> {
        self.api.delete(&item_path(id)).await.map_err(map_delete_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use std::sync::Arc;

    fn conflict(code: &str) -> ApiError {
        ApiError::Http {
            status: 400,
            code: Some(code.to_string()),
            message: "rejected".into(),
        }
    }

    fn service_failing_delete_with(error: ApiError) -> WorkspaceService {
        let mut raw = MockRawApiPort::new();
        raw.expect_delete()
            .withf(|path| path == "/workspace/w1")
            .returning(move |_| Err(error.clone()));
        WorkspaceService::new(Api::new(Arc::new(raw)))
    }

    #[tokio::test]
    async fn deleting_last_workspace_maps_to_dedicated_error() {
        let service = service_failing_delete_with(conflict(IS_LAST_WORKSPACE));
        let err = service.delete(&WorkspaceId::from("w1")).await.unwrap_err();
        assert_eq!(err, ServiceError::LastWorkspace);
    }

    #[tokio::test]
    async fn deleting_workspace_with_entities_maps_to_dedicated_error() {
        let service = service_failing_delete_with(conflict(ASSOCIATED_DATA_EXISTS));
        let err = service.delete(&WorkspaceId::from("w1")).await.unwrap_err();

        assert_eq!(err, ServiceError::WorkspaceHasEntities);
        assert_ne!(err.user_message(), ServiceError::LastWorkspace.user_message());
    }

    #[tokio::test]
    async fn other_delete_failures_stay_generic() {
        let service = service_failing_delete_with(conflict("SomethingElse"));
        let err = service.delete(&WorkspaceId::from("w1")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Api(_)));
    }

    #[tokio::test]
    async fn create_posts_to_collection() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| path == "/workspace" && body["name"] == "Saga")
            .times(1)
            .returning(|_, _| {
                Ok(serde_json::json!({
                    "id": "w9",
                    "name": "Saga",
                    "description": "",
                    "icon": "book",
                    "isDefault": false
                }))
            });

        let service = WorkspaceService::new(Api::new(Arc::new(raw)));
        let request = WorkspaceRequest::from(&Workspace::new("ignored", "Saga").with_icon("book"));
        let created = service.create(&request).await.unwrap();

        assert_eq!(created.id.as_str(), "w9");
        assert_eq!(created.icon, "book");
    }
}
