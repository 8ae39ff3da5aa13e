//! Entity Service - REST gateway for characters, creatures and locations
//!
//! All three kinds share one document shape and one endpoint layout, so a
//! single service parameterised by `EntityKind` covers them:
//!
//! - `GET/POST   /{kind}?workspaceId=`
//! - `GET/PUT/PATCH/DELETE /{kind}/{id}`
//!
//! Every non-2xx response surfaces as the generic `ServiceError::Api`.

use authortools_domain::{Entity, EntityId, EntityKind, PatchOperation, WorkspaceId};

use crate::application::api::Api;
use crate::application::dto::CreateEntityRequest;
use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

#[derive(Clone)]
pub struct EntityService {
    api: Api,
}

fn collection_path(kind: EntityKind) -> String {
    format!("/{}", kind.path_segment())
}

fn item_path(kind: EntityKind, id: &EntityId) -> String {
    format!("/{}/{}", kind.path_segment(), id)
}

/// Encode a value for use in a query string
pub(crate) fn encode_query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

impl EntityService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// List all entities of a kind in a workspace
    pub async fn list(
        &self,
        kind: EntityKind,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Entity>, ServiceError> {
        let path = format!(
            "{}?workspaceId={}",
            collection_path(kind),
            encode_query_value(workspace_id.as_str())
        );
        Ok(self.api.get(&path).await?)
    }

    /// Get a single entity by ID
    pub async fn get(&self, kind: EntityKind, id: &EntityId) -> Result<Entity, ServiceError> {
        Ok(self.api.get(&item_path(kind, id)).await?)
    }

    /// Create an entity; the server assigns its id
    pub async fn create(
        &self,
        kind: EntityKind,
        request: &CreateEntityRequest,
    ) -> Result<Entity, ServiceError> {
        Ok(self.api.post(&collection_path(kind), request).await?)
    }

    /// Replace the whole entity document
    pub async fn replace(
        &self,
        kind: EntityKind,
        id: &EntityId,
        entity: &Entity,
    ) -> Result<Entity, ServiceError> {
        Ok(self.api.put(&item_path(kind, id), entity).await?)
    }

    /// Apply JSON-Patch style operations to scalar fields
    pub async fn partial_update(
        &self,
        kind: EntityKind,
        id: &EntityId,
        operations: &[PatchOperation],
    ) -> Result<(), ServiceError> {
        Ok(self
            .api
            .patch_no_response(&item_path(kind, id), &operations)
            .await?)
    }

    /// Delete an entity by ID
    pub async fn delete(&self, kind: EntityKind, id: &EntityId) -> Result<(), ServiceError> {
        Ok(self.api.delete(&item_path(kind, id)).await?)
    }
}
