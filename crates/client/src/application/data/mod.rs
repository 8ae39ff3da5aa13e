//! Cached data access
//!
//! Each accessor pairs a REST service with the shared query cache. Reads go
//! through the cache; writes update or invalidate it and report failures to
//! the notification port before returning them.

pub mod entities;
pub mod user_settings;
pub mod workspaces;

pub use entities::{EntityData, ReorderReport};
pub use user_settings::UserSettingsData;
pub use workspaces::WorkspaceData;

use crate::application::ServiceError;
use crate::ports::outbound::{NotificationPort, Toast};

/// Raise an error toast for a failed mutation.
///
/// Cancellations are silent and local invariant violations are returned to
/// the caller only.
pub(crate) fn notify_failure(notifier: &dyn NotificationPort, title: &str, error: &ServiceError) {
    if error.is_cancelled() || error.is_invariant_violation() {
        return;
    }
    tracing::error!(error = %error, "{}", title);
    notifier.notify(Toast::error(title, error.user_message()));
}
