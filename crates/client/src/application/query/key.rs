//! Cache keys and invalidation filters

use std::fmt;

use authortools_domain::{EntityId, EntityKind, WorkspaceId};

/// Identity of one cached query result
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// All entities of a kind inside a workspace
    EntityList {
        kind: EntityKind,
        workspace_id: WorkspaceId,
    },
    /// One entity document
    Entity { kind: EntityKind, id: EntityId },
    /// The user's workspace list
    Workspaces,
    Workspace(WorkspaceId),
    UserSettings,
}

impl QueryKey {
    pub fn entity_list(kind: EntityKind, workspace_id: &WorkspaceId) -> Self {
        Self::EntityList {
            kind,
            workspace_id: workspace_id.clone(),
        }
    }

    pub fn entity(kind: EntityKind, id: &EntityId) -> Self {
        Self::Entity {
            kind,
            id: id.clone(),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntityList { kind, workspace_id } => write!(f, "{}[workspace={}]", kind, workspace_id),
            Self::Entity { kind, id } => write!(f, "{}/{}", kind, id),
            Self::Workspaces => f.write_str("workspace[]"),
            Self::Workspace(id) => write!(f, "workspace/{}", id),
            Self::UserSettings => f.write_str("user-settings"),
        }
    }
}

/// Selects the keys an invalidation applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFilter {
    Exact(QueryKey),
    /// Every list of the given kind, across workspaces
    EntityLists(EntityKind),
    /// The workspace list and every single workspace
    Workspaces,
    All,
}

impl QueryFilter {
    pub fn matches(&self, key: &QueryKey) -> bool {
        match (self, key) {
            (Self::All, _) => true,
            (Self::Exact(expected), key) => expected == key,
            (Self::EntityLists(kind), QueryKey::EntityList { kind: k, .. }) => kind == k,
            (Self::Workspaces, QueryKey::Workspaces | QueryKey::Workspace(_)) => true,
            _ => false,
        }
    }
}
