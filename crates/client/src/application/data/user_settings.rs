//! User settings data access

use std::sync::Arc;

use authortools_domain::{Theme, UserSetting};

use super::notify_failure;
use crate::application::query::{OptimisticUpdater, QueryCache, QueryFilter, QueryKey};
use crate::application::services::UserSettingsService;
use crate::application::ServiceError;
use crate::ports::outbound::NotificationPort;

#[derive(Clone)]
pub struct UserSettingsData {
    service: UserSettingsService,
    cache: QueryCache,
    optimistic: OptimisticUpdater,
    notifier: Arc<dyn NotificationPort>,
}

impl UserSettingsData {
    pub fn new(
        service: UserSettingsService,
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

    /// The user's settings, created with defaults on first use
    pub async fn load(&self) -> Result<UserSetting, ServiceError> {
        let service = self.service.clone();
        self.cache
            .query(QueryKey::UserSettings, || async move {
                service.load_or_create().await
            })
            .await
    }

    pub async fn set_theme(
        &self,
        current: &UserSetting,
        theme: Theme,
    ) -> Result<UserSetting, ServiceError> {
        let next = current.with_theme(theme);
        let result = self
            .optimistic
            .run(
                QueryKey::UserSettings,
                &next,
                QueryFilter::Exact(QueryKey::UserSettings),
                self.service.update(&next.id, &next),
            )
            .await;

        match result {
            Ok(saved) => {
                tracing::info!(theme = %saved.theme, "Theme saved");
                Ok(saved)
            }
            Err(e) => {
                notify_failure(&*self.notifier, "Could not save settings", &e);
                Err(e)
            }
        }
    }
}
