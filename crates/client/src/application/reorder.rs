//! Drag reorder controller
//!
//! Tracks one drag gesture over a displayed list. The list is rearranged
//! live while the pointer moves; dropping yields the `order` changes that
//! must be sent to the server.

use authortools_domain::{move_item, order_changes, renumber, OrderChange, Ordered};

pub struct DragReorder<T: Ordered> {
    items: Vec<T>,
    /// Id sequence at drag start
    snapshot: Vec<T::Id>,
    dragging: Option<T::Id>,
    last_hovered: Option<T::Id>,
}

impl<T: Ordered> DragReorder<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            snapshot: Vec::new(),
            dragging: None,
            last_hovered: None,
        }
    }

    /// Load a fresh list, abandoning any gesture in progress
    pub fn start(&mut self, items: Vec<T>) {
        self.items = items;
        self.snapshot.clear();
        self.dragging = None;
        self.last_hovered = None;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Begin dragging `id`. Returns false if it is not in the list.
    pub fn drag_start(&mut self, id: &T::Id) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        self.snapshot = self.items.iter().map(|item| item.id().clone()).collect();
        self.dragging = Some(id.clone());
        self.last_hovered = None;
        true
    }

    /// Pointer moved over `id`. Returns whether the list changed.
    pub fn drag_over(&mut self, id: &T::Id) -> bool {
        let Some(source) = self.dragging.clone() else {
            return false;
        };
        if self.last_hovered.as_ref() == Some(id) {
            return false;
        }
        // Hovering the dragged item itself still counts, so the next hover
        // over its old neighbour moves it back.
        self.last_hovered = Some(id.clone());
        if &source == id {
            return false;
        }

        match (self.position(&source), self.position(id)) {
            (Some(from), Some(to)) => {
                move_item(&mut self.items, from, to);
                true
            }
            _ => false,
        }
    }

    /// Finish the gesture and return the changes to persist.
    ///
    /// Nothing is returned when the final sequence equals the one at drag
    /// start. Otherwise local orders are rewritten to `1..N`.
    pub fn drag_end(&mut self) -> Vec<OrderChange<T::Id>> {
        self.last_hovered = None;
        if self.dragging.take().is_none() {
            return Vec::new();
        }

        let unchanged = self.snapshot.len() == self.items.len()
            && self
                .snapshot
                .iter()
                .zip(&self.items)
                .all(|(id, item)| id == item.id());
        self.snapshot.clear();
        if unchanged {
            return Vec::new();
        }

        let changes = order_changes(&self.items);
        renumber(&mut self.items);
        tracing::debug!(changed = changes.len(), "Drag reorder finished");
        changes
    }
}
