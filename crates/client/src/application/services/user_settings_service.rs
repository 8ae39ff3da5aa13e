//! User settings service
//!
//! One settings document per signed-in user. It does not exist until the
//! first save, so `get` returns `None` for a fresh account.

use authortools_domain::{Theme, UserSetting, UserSettingId};

use crate::application::api::Api;
use crate::application::dto::CreateUserSettingRequest;
use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

const USER_SETTINGS_PATH: &str = "/user-settings";

#[derive(Clone)]
pub struct UserSettingsService {
    api: Api,
}

impl UserSettingsService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn get(&self) -> Result<Option<UserSetting>, ServiceError> {
        Ok(self.api.get_optional(USER_SETTINGS_PATH).await?)
    }

    pub async fn create(&self, theme: Theme) -> Result<UserSetting, ServiceError> {
        let request = CreateUserSettingRequest { theme };
        Ok(self.api.post(USER_SETTINGS_PATH, &request).await?)
    }

    pub async fn update(
        &self,
        id: &UserSettingId,
        setting: &UserSetting,
    ) -> Result<UserSetting, ServiceError> {
        let path = format!("{}/{}", USER_SETTINGS_PATH, id);
        Ok(self.api.put(&path, setting).await?)
    }

    /// Fetch the settings document, creating a default one if none exists
    pub async fn load_or_create(&self) -> Result<UserSetting, ServiceError> {
        if let Some(existing) = self.get().await? {
            return Ok(existing);
        }
        tracing::info!("No user settings found, creating defaults");
        self.create(Theme::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use std::sync::Arc;

    #[tokio::test]
    async fn load_or_create_returns_existing_settings() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_optional_json()
            .withf(|path| path == "/user-settings")
            .returning(|_| Ok(Some(serde_json::json!({ "id": "s1", "theme": "dark" }))));
        raw.expect_post_json().never();

        let service = UserSettingsService::new(Api::new(Arc::new(raw)));
        let setting = service.load_or_create().await.unwrap();

        assert_eq!(setting.theme, Theme::Dark);
    }

    #[tokio::test]
    async fn load_or_create_creates_defaults_for_new_users() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_optional_json().returning(|_| Ok(None));
        raw.expect_post_json()
            .withf(|path, body| path == "/user-settings" && body["theme"] == "system")
            .times(1)
            .returning(|_, _| Ok(serde_json::json!({ "id": "s2", "theme": "system" })));

        let service = UserSettingsService::new(Api::new(Arc::new(raw)));
        let setting = service.load_or_create().await.unwrap();

        assert_eq!(setting.id.as_str(), "s2");
    }
}
