//! Domain entities

mod detail_section;
mod entity;
mod user_setting;
mod workspace;

pub use detail_section::{Attribute, DetailSection, SectionType, SectionUpdate};
pub use entity::{Entity, EntityKind};
pub use user_setting::{Theme, UserSetting};
pub use workspace::{resolve_active_workspace, Workspace};
