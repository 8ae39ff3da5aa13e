//! Active workspace state

use std::sync::Arc;

use authortools_domain::{resolve_active_workspace, Workspace, WorkspaceId};

use super::store::{Reducer, Store};
use crate::ports::outbound::{storage_keys, StorageProvider};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceState {
    pub workspaces: Vec<Workspace>,
    pub active_id: Option<WorkspaceId>,
}

impl WorkspaceState {
    pub fn active(&self) -> Option<&Workspace> {
        let id = self.active_id.as_ref()?;
        self.workspaces.iter().find(|w| &w.id == id)
    }
}

#[derive(Debug, Clone)]
pub enum WorkspaceAction {
    /// Replace the list and pick the active one, preferring `preferred`
    Loaded {
        workspaces: Vec<Workspace>,
        preferred: Option<WorkspaceId>,
    },
    /// Ignored when the id is not in the list
    SetActive(WorkspaceId),
    Upserted(Workspace),
    Removed(WorkspaceId),
    Clear,
}

pub struct WorkspaceReducer;

impl Reducer for WorkspaceReducer {
    type State = WorkspaceState;
    type Action = WorkspaceAction;

    fn reduce(state: &WorkspaceState, action: WorkspaceAction) -> WorkspaceState {
        match action {
            WorkspaceAction::Loaded {
                workspaces,
                preferred,
            } => {
                let active_id = resolve_active_workspace(&workspaces, preferred.as_ref())
                    .map(|w| w.id.clone());
                WorkspaceState {
                    workspaces,
                    active_id,
                }
            }
            WorkspaceAction::SetActive(id) => {
                let mut next = state.clone();
                if next.workspaces.iter().any(|w| w.id == id) {
                    next.active_id = Some(id);
                }
                next
            }
            WorkspaceAction::Upserted(workspace) => {
                let mut next = state.clone();
                match next.workspaces.iter_mut().find(|w| w.id == workspace.id) {
                    Some(existing) => *existing = workspace,
                    None => next.workspaces.push(workspace),
                }
                if next.active_id.is_none() {
                    next.active_id = resolve_active_workspace(&next.workspaces, None)
                        .map(|w| w.id.clone());
                }
                next
            }
            WorkspaceAction::Removed(id) => {
                let mut next = state.clone();
                next.workspaces.retain(|w| w.id != id);
                if next.active_id.as_ref() == Some(&id) {
                    next.active_id = resolve_active_workspace(&next.workspaces, None)
                        .map(|w| w.id.clone());
                }
                next
            }
            WorkspaceAction::Clear => WorkspaceState::default(),
        }
    }
}

/// Workspace store that remembers the active workspace across runs
#[derive(Clone)]
pub struct WorkspaceSession {
    store: Store<WorkspaceReducer>,
    storage: Arc<dyn StorageProvider>,
    storage_key: String,
}

impl WorkspaceSession {
    pub fn new(storage: Arc<dyn StorageProvider>, user_id: &str) -> Self {
        Self {
            store: Store::default(),
            storage,
            storage_key: storage_keys::active_workspace(user_id),
        }
    }

    pub fn store(&self) -> &Store<WorkspaceReducer> {
        &self.store
    }

    pub fn state(&self) -> WorkspaceState {
        self.store.state()
    }

    /// Last active workspace id recorded for this user
    pub fn persisted_active(&self) -> Option<WorkspaceId> {
        self.storage
            .load(&self.storage_key)
            .filter(|id| !id.is_empty())
            .map(WorkspaceId::from)
    }

    /// Install a freshly loaded list, restoring the persisted selection
    pub fn load(&self, workspaces: Vec<Workspace>) -> Option<Workspace> {
        let preferred = self.persisted_active();
        self.apply(WorkspaceAction::Loaded {
            workspaces,
            preferred,
        })
    }

    pub fn set_active(&self, id: WorkspaceId) -> Option<Workspace> {
        self.apply(WorkspaceAction::SetActive(id))
    }

    /// Dispatch and persist whichever workspace ends up active
    pub fn apply(&self, action: WorkspaceAction) -> Option<Workspace> {
        self.store.dispatch(action);
        let state = self.store.state();
        match state.active() {
            Some(active) => {
                self.storage.save(&self.storage_key, active.id.as_str());
                tracing::debug!(workspace = %active.id, "Active workspace");
                Some(active.clone())
            }
            None => {
                self.storage.remove(&self.storage_key);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures::InMemoryStorage;

    fn workspaces() -> Vec<Workspace> {
        vec![
            Workspace::new("w1", "Drafts"),
            Workspace::new("w2", "Saga").as_default(),
        ]
    }

    #[test]
    fn load_falls_back_to_default_workspace() {
        let session = WorkspaceSession::new(Arc::new(InMemoryStorage::default()), "u1");

        let active = session.load(workspaces());

        assert_eq!(active.map(|w| w.id), Some(WorkspaceId::from("w2")));
    }

    #[test]
    fn active_workspace_is_persisted_per_user() {
        let storage = Arc::new(InMemoryStorage::default());
        let session = WorkspaceSession::new(storage.clone(), "u1");
        session.load(workspaces());
        session.set_active(WorkspaceId::from("w1"));

        assert_eq!(
            storage.load("authortools_active_workspace:u1").as_deref(),
            Some("w1")
        );

        let restored = WorkspaceSession::new(storage.clone(), "u1");
        assert_eq!(
            restored.load(workspaces()).map(|w| w.id),
            Some(WorkspaceId::from("w1"))
        );

        let other_user = WorkspaceSession::new(storage, "u2");
        assert_eq!(
            other_user.load(workspaces()).map(|w| w.id),
            Some(WorkspaceId::from("w2"))
        );
    }

    #[test]
    fn stale_persisted_id_is_ignored() {
        let storage = Arc::new(InMemoryStorage::default());
        storage.save("authortools_active_workspace:u1", "gone");
        let session = WorkspaceSession::new(storage, "u1");

        assert_eq!(
            session.load(workspaces()).map(|w| w.id),
            Some(WorkspaceId::from("w2"))
        );
    }

    #[test]
    fn removing_active_workspace_selects_another() {
        let state = WorkspaceReducer::reduce(
            &WorkspaceState::default(),
            WorkspaceAction::Loaded {
                workspaces: workspaces(),
                preferred: Some(WorkspaceId::from("w1")),
            },
        );

        let next = WorkspaceReducer::reduce(&state, WorkspaceAction::Removed(WorkspaceId::from("w1")));

        assert_eq!(next.workspaces.len(), 1);
        assert_eq!(next.active_id, Some(WorkspaceId::from("w2")));
    }

    #[test]
    fn set_active_ignores_unknown_ids() {
        let state = WorkspaceReducer::reduce(
            &WorkspaceState::default(),
            WorkspaceAction::Loaded {
                workspaces: workspaces(),
                preferred: None,
            },
        );

        let next = WorkspaceReducer::reduce(&state, WorkspaceAction::SetActive(WorkspaceId::from("nope")));

        assert_eq!(next.active_id, state.active_id);
    }
}
