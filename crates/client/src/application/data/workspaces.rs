//! Workspace data access

use std::sync::Arc;

use authortools_domain::{Workspace, WorkspaceId};

use super::notify_failure;
use crate::application::dto::WorkspaceRequest;
use crate::application::query::{OptimisticUpdater, QueryCache, QueryFilter, QueryKey};
use crate::application::services::WorkspaceService;
use crate::application::ServiceError;
use crate::ports::outbound::NotificationPort;

#[derive(Clone)]
pub struct WorkspaceData {
    service: WorkspaceService,
    cache: QueryCache,
    optimistic: OptimisticUpdater,
    notifier: Arc<dyn NotificationPort>,
}

impl WorkspaceData {
    pub fn new(
        service: WorkspaceService,
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

    pub async fn list(&self) -> Result<Vec<Workspace>, ServiceError> {
        let service = self.service.clone();
        self.cache
            .query(QueryKey::Workspaces, || async move { service.list().await })
            .await
    }

    pub async fn get(&self, id: &WorkspaceId) -> Result<Workspace, ServiceError> {
        let service = self.service.clone();
        let id = id.clone();
        self.cache
            .query(QueryKey::Workspace(id.clone()), || async move {
                service.get(&id).await
            })
            .await
    }

    pub async fn create(&self, workspace: &Workspace) -> Result<Workspace, ServiceError> {
        workspace.validate()?;
        let _pending = self.cache.begin_mutation();
        match self.service.create(&WorkspaceRequest::from(workspace)).await {
            Ok(created) => {
                tracing::info!(id = %created.id, name = %created.name, "Workspace created");
                self.cache.invalidate(&QueryFilter::Workspaces);
                Ok(created)
            }
            Err(e) => {
                notify_failure(&*self.notifier, "Could not create workspace", &e);
                Err(e)
            }
        }
    }

    pub async fn update(&self, workspace: Workspace) -> Result<Workspace, ServiceError> {
        workspace.validate()?;
        let request = WorkspaceRequest::from(&workspace);
        let result = self
            .optimistic
            .run(
                QueryKey::Workspace(workspace.id.clone()),
                &workspace,
                QueryFilter::Exact(QueryKey::Workspaces),
                self.service.update(&workspace.id, &request),
            )
            .await;

        result.inspect_err(|e| {
            notify_failure(&*self.notifier, "Could not save workspace", e);
        })
    }

    /// Delete a workspace; refusals carry their own toast text
    pub async fn delete(&self, id: &WorkspaceId) -> Result<(), ServiceError> {
        let _pending = self.cache.begin_mutation();
        match self.service.delete(id).await {
            Ok(()) => {
                tracing::info!(%id, "Workspace deleted");
                self.cache.remove(&QueryKey::Workspace(id.clone()));
                self.cache.invalidate(&QueryFilter::Workspaces);
                Ok(())
            }
            Err(e) => {
                notify_failure(&*self.notifier, "Could not delete workspace", &e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::ports::outbound::{ApiError, MockNotificationPort, MockRawApiPort};

    fn data(raw: MockRawApiPort, notifier: MockNotificationPort) -> WorkspaceData {
        WorkspaceData::new(
            WorkspaceService::new(Api::new(Arc::new(raw))),
            QueryCache::new(),
            Arc::new(notifier),
        )
    }

    fn refused(code: &str) -> ApiError {
        ApiError::Http {
            status: 400,
            code: Some(code.to_string()),
            message: "refused".into(),
        }
    }

    #[tokio::test]
    async fn last_workspace_refusal_toasts_its_own_message() {
        let mut raw = MockRawApiPort::new();
        raw.expect_delete()
            .returning(|_| Err(refused(crate::application::services::IS_LAST_WORKSPACE)));
        let mut notifier = MockNotificationPort::new();
        notifier
            .expect_notify()
            .withf(|toast| toast.message == ServiceError::LastWorkspace.user_message())
            .times(1)
            .return_const(());

        let err = data(raw, notifier)
            .delete(&WorkspaceId::from("w1"))
            .await
            .unwrap_err();

        assert_eq!(err, ServiceError::LastWorkspace);
    }

    #[tokio::test]
    async fn associated_data_refusal_toasts_a_different_message() {
        let mut raw = MockRawApiPort::new();
        raw.expect_delete()
            .returning(|_| Err(refused(crate::application::services::ASSOCIATED_DATA_EXISTS)));
        let mut notifier = MockNotificationPort::new();
        notifier
            .expect_notify()
            .withf(|toast| toast.message == ServiceError::WorkspaceHasEntities.user_message())
            .times(1)
            .return_const(());

        let err = data(raw, notifier)
            .delete(&WorkspaceId::from("w1"))
            .await
            .unwrap_err();

        assert_eq!(err, ServiceError::WorkspaceHasEntities);
    }

    #[tokio::test]
    async fn create_invalidates_workspace_list() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == "/workspace")
            .times(2)
            .returning(|_| Ok(serde_json::json!([])));
        raw.expect_post_json().returning(|_, body| {
            let mut created = body.clone();
            created["id"] = serde_json::json!("w2");
            Ok(created)
        });
        let mut notifier = MockNotificationPort::new();
        notifier.expect_notify().never();

        let data = data(raw, notifier);
        data.list().await.unwrap();
        data.create(&Workspace::new("ignored", "Saga")).await.unwrap();
        data.list().await.unwrap();
    }

    #[tokio::test]
    async fn invalid_workspace_is_rejected_before_any_request() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().never();
        let mut notifier = MockNotificationPort::new();
        notifier.expect_notify().never();

        let err = data(raw, notifier)
            .create(&Workspace::new("w1", "   "))
            .await
            .unwrap_err();

        assert!(err.is_invariant_violation());
    }
}
