//! Tools for Authors domain
//!
//! Entity documents, their nested detail sections, workspaces and user
//! settings, plus the ordering and patch vocabulary the client sends back
//! to the API. Nothing in this crate performs I/O.

pub mod entities;
pub mod error;
pub mod ids;
pub mod ordering;
pub mod patch;

pub use entities::{
    resolve_active_workspace, Attribute, DetailSection, Entity, EntityKind, SectionType,
    SectionUpdate, Theme, UserSetting, Workspace,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{AttributeId, EntityId, FileId, SectionId, UserSettingId, WorkspaceId};

pub use ordering::{
    is_dense, move_item, order_changes, renumber, sort_by_order, OrderChange, Ordered,
};
pub use patch::{PatchOp, PatchOperation};
