//! Application services
//!
//! Thin REST gateways, one per resource. They depend on the typed `Api`
//! wrapper, never on a concrete HTTP client, and do no caching.

pub mod entity_service;
pub mod file_service;
pub mod user_settings_service;
pub mod workspace_service;

pub use entity_service::EntityService;
pub use file_service::FileService;
pub use user_settings_service::UserSettingsService;
pub use workspace_service::{WorkspaceService, ASSOCIATED_DATA_EXISTS, IS_LAST_WORKSPACE};
