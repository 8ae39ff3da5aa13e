//! Client-side state containers
//!
//! Each container is a pure reducer behind a `Store`. Views dispatch
//! actions and subscribe to snapshots; nothing here performs I/O except
//! `WorkspaceSession`, which remembers the active workspace per user.

pub mod breadcrumb;
pub mod store;
pub mod user_settings;
pub mod workspace;

pub use breadcrumb::{BreadcrumbAction, BreadcrumbReducer, BreadcrumbState, Crumb};
pub use store::{Reducer, Store};
pub use user_settings::{UserSettingsAction, UserSettingsReducer, UserSettingsState};
pub use workspace::{WorkspaceAction, WorkspaceReducer, WorkspaceSession, WorkspaceState};
