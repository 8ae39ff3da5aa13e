//! Per-user settings document

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::UserSettingId;

/// UI colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the operating system preference
    #[default]
    System,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        };
        f.write_str(name)
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(DomainError::parse(format!("Unknown theme: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSetting {
    pub id: UserSettingId,
    #[serde(default)]
    pub theme: Theme,
}

impl UserSetting {
    pub fn new(id: impl Into<UserSettingId>, theme: Theme) -> Self {
        Self {
            id: id.into(),
            theme,
        }
    }

    pub fn with_theme(&self, theme: Theme) -> Self {
        Self {
            id: self.id.clone(),
            theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_field_defaults_to_system() {
        let setting: UserSetting = serde_json::from_str(r#"{"id":"s1"}"#).unwrap();
        assert_eq!(setting.theme, Theme::System);
    }

    #[test]
    fn theme_round_trips_through_strings() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }
        assert!("sepia".parse::<Theme>().is_err());
    }
}
