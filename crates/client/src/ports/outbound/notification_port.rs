//! Notification Port - non-blocking user notifications ("toasts")
//!
//! Mutation failures are reported here instead of interrupting the caller's
//! flow. Delivery is fire-and-forget.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(ToastLevel::Error, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(ToastLevel::Info, title, message)
    }

    fn with_level(level: ToastLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait NotificationPort: Send + Sync {
    fn notify(&self, toast: Toast);
}
