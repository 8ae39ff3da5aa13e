//! Composition root
//!
//! Wires one query cache, the REST gateways and the state stores together
//! so every accessor shares the same cache and notifier.

use std::sync::Arc;

use authortools_domain::{UserSetting, Workspace};

use crate::application::api::Api;
use crate::application::data::{EntityData, UserSettingsData, WorkspaceData};
use crate::application::query::QueryCache;
use crate::application::section_editor::SectionEditor;
use crate::application::services::{
    EntityService, FileService, UserSettingsService, WorkspaceService,
};
use crate::application::ServiceError;
use crate::config::ClientConfig;
use crate::infrastructure::HttpApiAdapter;
use crate::ports::outbound::{IdentityPort, NotificationPort, RawApiPort, StorageProvider};
use crate::state::{
    BreadcrumbAction, BreadcrumbReducer, Store, UserSettingsAction, UserSettingsReducer,
    WorkspaceSession,
};

#[derive(Clone)]
pub struct AuthorTools {
    pub cache: QueryCache,
    pub entities: EntityData,
    pub sections: SectionEditor,
    pub workspaces: WorkspaceData,
    pub user_settings: UserSettingsData,
    pub files: FileService,
    pub workspace_session: WorkspaceSession,
    pub breadcrumbs: Store<BreadcrumbReducer>,
    pub settings: Store<UserSettingsReducer>,
}

impl AuthorTools {
    pub fn new(
        raw: Arc<dyn RawApiPort>,
        api_url: &str,
        notifier: Arc<dyn NotificationPort>,
        storage: Arc<dyn StorageProvider>,
        user_id: &str,
    ) -> Self {
        let api = Api::new(raw);
        let cache = QueryCache::new();

        let entities = EntityData::new(
            EntityService::new(api.clone()),
            cache.clone(),
            Arc::clone(&notifier),
        );

        Self {
            sections: SectionEditor::new(entities.clone()),
            entities,
            workspaces: WorkspaceData::new(
                WorkspaceService::new(api.clone()),
                cache.clone(),
                Arc::clone(&notifier),
            ),
            user_settings: UserSettingsData::new(
                UserSettingsService::new(api.clone()),
                cache.clone(),
                notifier,
            ),
            files: FileService::new(api, api_url),
            workspace_session: WorkspaceSession::new(storage, user_id),
            breadcrumbs: Store::default(),
            settings: Store::default(),
            cache,
        }
    }

    /// Wire the HTTP adapter described by `config`
    pub fn from_config(
        config: &ClientConfig,
        identity: Arc<dyn IdentityPort>,
        notifier: Arc<dyn NotificationPort>,
        storage: Arc<dyn StorageProvider>,
    ) -> Result<Self, ServiceError> {
        let user_id = identity.user_id();
        let raw = Arc::new(HttpApiAdapter::new(
            &config.api_url,
            identity,
            config.request_timeout,
        )?);
        Ok(Self::new(raw, &config.api_url, notifier, storage, &user_id))
    }

    /// Load workspaces and activate the remembered, default or first one
    pub async fn open_workspace(&self) -> Result<Option<Workspace>, ServiceError> {
        let workspaces = self.workspaces.list().await?;
        let active = self.workspace_session.load(workspaces);
        if let Some(workspace) = &active {
            self.breadcrumbs
                .dispatch(BreadcrumbAction::SetWorkspaceName(workspace.name.clone()));
        }
        Ok(active)
    }

    pub async fn load_settings(&self) -> Result<UserSetting, ServiceError> {
        let setting = self.user_settings.load().await?;
        self.settings
            .dispatch(UserSettingsAction::Loaded(Some(setting.clone())));
        Ok(setting)
    }
}
