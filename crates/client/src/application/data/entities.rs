//! Entity data access
//!
//! Cached reads and cache-aware mutations for characters, creatures and
//! locations.

use std::sync::Arc;

use futures_util::future::join_all;

use authortools_domain::{
    sort_by_order, Entity, EntityId, EntityKind, OrderChange, PatchOperation, WorkspaceId,
};

use super::notify_failure;
use crate::application::dto::CreateEntityRequest;
use crate::application::query::{OptimisticUpdater, QueryCache, QueryFilter, QueryKey};
use crate::application::services::EntityService;
use crate::application::ServiceError;
use crate::ports::outbound::NotificationPort;

/// Outcome of persisting a drag reorder
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReorderReport {
    pub succeeded: Vec<EntityId>,
    pub failed: Vec<(EntityId, ServiceError)>,
}

impl ReorderReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Clone)]
pub struct EntityData {
    service: EntityService,
    cache: QueryCache,
    optimistic: OptimisticUpdater,
    notifier: Arc<dyn NotificationPort>,
}

impl EntityData {
    pub fn new(
        service: EntityService,
        cache: QueryCache,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            service,
            optimistic: OptimisticUpdater::new(cache.clone()),
            cache,
            notifier,
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Entities of a kind in a workspace, in display order
    pub async fn list(
        &self,
        kind: EntityKind,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Entity>, ServiceError> {
        let key = QueryKey::entity_list(kind, workspace_id);
        let service = self.service.clone();
        let workspace_id = workspace_id.clone();
        self.cache
            .query(key, || async move {
                let mut entities = service.list(kind, &workspace_id).await?;
                sort_by_order(&mut entities);
                Ok(entities)
            })
            .await
    }

    pub async fn get(&self, kind: EntityKind, id: &EntityId) -> Result<Entity, ServiceError> {
        let key = QueryKey::entity(kind, id);
        let service = self.service.clone();
        let id = id.clone();
        self.cache
            .query(key, || async move { service.get(kind, &id).await })
            .await
    }

    pub async fn create(
        &self,
        kind: EntityKind,
        request: &CreateEntityRequest,
    ) -> Result<Entity, ServiceError> {
        let _pending = self.cache.begin_mutation();
        match self.service.create(kind, request).await {
            Ok(created) => {
                tracing::info!(%kind, id = %created.id, "Entity created");
                self.cache.set(&QueryKey::entity(kind, &created.id), &created)?;
                self.cache.invalidate(&QueryFilter::EntityLists(kind));
                Ok(created)
            }
            Err(e) => {
                notify_failure(&*self.notifier, &format!("Could not create {}", kind.label()), &e);
                Err(e)
            }
        }
    }

    /// Replace the whole entity document, showing the new value right away
    pub async fn update(&self, kind: EntityKind, entity: Entity) -> Result<Entity, ServiceError> {
        let key = QueryKey::entity(kind, &entity.id);
        let result = self
            .optimistic
            .run(
                key,
                &entity,
                QueryFilter::EntityLists(kind),
                self.service.replace(kind, &entity.id, &entity),
            )
            .await;

        match result {
            Ok(saved) => {
                tracing::info!(%kind, id = %saved.id, "Entity saved");
                Ok(saved)
            }
            Err(e) => {
                notify_failure(&*self.notifier, &format!("Could not save {}", kind.label()), &e);
                Err(e)
            }
        }
    }

    pub async fn delete(&self, kind: EntityKind, id: &EntityId) -> Result<(), ServiceError> {
        let _pending = self.cache.begin_mutation();
        let key = QueryKey::entity(kind, id);
        self.cache.cancel(&key);
        match self.service.delete(kind, id).await {
            Ok(()) => {
                tracing::info!(%kind, %id, "Entity deleted");
                self.cache.remove(&key);
                self.cache.invalidate(&QueryFilter::EntityLists(kind));
                Ok(())
            }
            Err(e) => {
                notify_failure(&*self.notifier, &format!("Could not delete {}", kind.label()), &e);
                Err(e)
            }
        }
    }

    /// Persist the result of a drag reorder.
    ///
    /// `items` is the list as displayed after the drop and is written to
    /// the cache first. One PATCH per change is sent concurrently.
    ///
    /// Failed PATCHes are toasted but NOT rolled back: the cached list keeps
    /// the dropped order even though the server may disagree.
    pub async fn commit_reorder(
        &self,
        kind: EntityKind,
        workspace_id: &WorkspaceId,
        items: &[Entity],
        changes: &[OrderChange<EntityId>],
    ) -> Result<ReorderReport, ServiceError> {
        let list_key = QueryKey::entity_list(kind, workspace_id);
        self.cache.cancel(&list_key);
        self.cache.set(&list_key, &items)?;

        let mut report = ReorderReport::default();
        if changes.is_empty() {
            return Ok(report);
        }

        let _pending = self.cache.begin_mutation();
        let service = &self.service;
        let requests = changes.iter().map(|change| async move {
            let result = service
                .partial_update(kind, &change.id, &[PatchOperation::from(change)])
                .await;
            (change.id.clone(), result)
        });

        for (id, result) in join_all(requests).await {
            match result {
                Ok(()) => report.succeeded.push(id),
                Err(e) => {
                    notify_failure(
                        &*self.notifier,
                        &format!("Could not reorder {}", kind.label()),
                        &e,
                    );
                    report.failed.push((id, e));
                }
            }
        }

        if !report.succeeded.is_empty() {
            self.cache.invalidate(&QueryFilter::EntityLists(kind));
        }
        tracing::info!(
            %kind,
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            "Reorder committed"
        );
        Ok(report)
    }
}
