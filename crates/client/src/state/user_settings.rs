//! User settings state

use authortools_domain::{Theme, UserSetting};

use super::store::Reducer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSettingsState {
    pub setting: Option<UserSetting>,
    pub theme: Theme,
}

#[derive(Debug, Clone)]
pub enum UserSettingsAction {
    Loaded(Option<UserSetting>),
    SetTheme(Theme),
}

pub struct UserSettingsReducer;

impl Reducer for UserSettingsReducer {
    type State = UserSettingsState;
    type Action = UserSettingsAction;

    fn reduce(state: &UserSettingsState, action: UserSettingsAction) -> UserSettingsState {
        match action {
            UserSettingsAction::Loaded(setting) => UserSettingsState {
                theme: setting.as_ref().map(|s| s.theme).unwrap_or_default(),
                setting,
            },
            UserSettingsAction::SetTheme(theme) => UserSettingsState {
                setting: state.setting.as_ref().map(|s| s.with_theme(theme)),
                theme,
            },
        }
    }
}
