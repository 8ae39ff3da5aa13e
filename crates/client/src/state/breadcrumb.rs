//! Navigation trail shown above the page

use serde::{Deserialize, Serialize};

use super::store::Reducer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    pub name: String,
    /// `None` for the current, non-clickable page
    pub url: Option<String>,
}

impl Crumb {
    pub fn new(name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            name: name.into(),
            url,
        }
    }

    pub fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(name, Some(url.into()))
    }

    pub fn current(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreadcrumbState {
    pub workspace_name: String,
    pub trail: Vec<Crumb>,
}

#[derive(Debug, Clone)]
pub enum BreadcrumbAction {
    SetWorkspaceName(String),
    SetTrail(Vec<Crumb>),
    /// Append a crumb, or cut the trail back to it if already present
    Push(Crumb),
    /// Empty the trail; the workspace name stays
    Clear,
}

pub struct BreadcrumbReducer;

impl Reducer for BreadcrumbReducer {
    type State = BreadcrumbState;
    type Action = BreadcrumbAction;

    fn reduce(state: &BreadcrumbState, action: BreadcrumbAction) -> BreadcrumbState {
        let mut next = state.clone();
        match action {
            BreadcrumbAction::SetWorkspaceName(name) => next.workspace_name = name,
            BreadcrumbAction::SetTrail(trail) => next.trail = trail,
            BreadcrumbAction::Push(crumb) => {
                match next.trail.iter().position(|c| c == &crumb) {
                    Some(pos) => next.trail.truncate(pos + 1),
                    None => next.trail.push(crumb),
                }
            }
            BreadcrumbAction::Clear => next.trail.clear(),
        }
        next
    }
}
