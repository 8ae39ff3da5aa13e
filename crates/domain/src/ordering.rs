//! Display ordering
//!
//! Siblings carry a dense 1-based `order`. The server does not enforce it;
//! the client restores `1..N` after every reorder by re-deriving each
//! item's order from its list position.

use serde::{Deserialize, Serialize};

/// Something with an identity and a display position
pub trait Ordered {
    type Id: Clone + PartialEq;

    fn id(&self) -> &Self::Id;
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}

/// A required change to one item's `order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderChange<Id> {
    pub id: Id,
    pub order: u32,
}

/// Move the element at `from` so that it ends up at index `to`.
///
/// This is remove-then-insert, not a swap: everything between the two
/// positions shifts by one. Out-of-range indices leave the list unchanged.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Items whose stored `order` disagrees with their 1-based position.
pub fn order_changes<T: Ordered>(items: &[T]) -> Vec<OrderChange<T::Id>> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let position = index as u32 + 1;
            (item.order() != position).then(|| OrderChange {
                id: item.id().clone(),
                order: position,
            })
        })
        .collect()
}

/// Rewrite every item's `order` to its 1-based position.
pub fn renumber<T: Ordered>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as u32 + 1);
    }
}

/// Sort by `order`, keeping the incoming sequence for ties.
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(|item| item.order());
}

/// Whether the orders are exactly `1..=N` in list sequence.
pub fn is_dense<T: Ordered>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(index, item)| item.order() == index as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        id: &'static str,
        order: u32,
    }

    impl Ordered for Card {
        type Id = &'static str;

        fn id(&self) -> &Self::Id {
            &self.id
        }

        fn order(&self) -> u32 {
            self.order
        }

        fn set_order(&mut self, order: u32) {
            self.order = order;
        }
    }

    fn cards(names: &[&'static str]) -> Vec<Card> {
        names
            .iter()
            .enumerate()
            .map(|(i, id)| Card {
                id: *id,
                order: i as u32 + 1,
            })
            .collect()
    }

    fn ids(items: &[Card]) -> Vec<&'static str> {
        items.iter().map(|c| c.id).collect()
    }

    #[test]
    fn move_forward_shifts_intermediate_items_back() {
        let mut items = cards(&["a", "b", "c", "d"]);
        move_item(&mut items, 0, 2);
        assert_eq!(ids(&items), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn move_backward_shifts_intermediate_items_forward() {
        let mut items = cards(&["a", "b", "c", "d"]);
        move_item(&mut items, 3, 1);
        assert_eq!(ids(&items), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn move_matches_remove_then_insert_for_every_pair() {
        let base = cards(&["a", "b", "c", "d", "e"]);
        for from in 0..base.len() {
            for to in 0..base.len() {
                let mut moved = base.clone();
                move_item(&mut moved, from, to);

                let mut expected = base.clone();
                let item = expected.remove(from);
                expected.insert(to, item);

                assert_eq!(ids(&moved), ids(&expected), "from {} to {}", from, to);
            }
        }
    }

    #[test]
    fn out_of_range_move_is_ignored() {
        let mut items = cards(&["a", "b"]);
        move_item(&mut items, 0, 5);
        assert_eq!(ids(&items), vec!["a", "b"]);
    }

    #[test]
    fn order_changes_only_cover_moved_items() {
        let mut items = cards(&["a", "b", "c", "d"]);
        move_item(&mut items, 0, 2);

        let changes = order_changes(&items);

        assert_eq!(
            changes,
            vec![
                OrderChange { id: "b", order: 1 },
                OrderChange { id: "c", order: 2 },
                OrderChange { id: "a", order: 3 },
            ]
        );
    }

    #[test]
    fn renumber_restores_density() {
        let mut items = vec![
            Card { id: "a", order: 4 },
            Card { id: "b", order: 4 },
            Card { id: "c", order: 9 },
        ];
        assert!(!is_dense(&items));

        renumber(&mut items);

        assert!(is_dense(&items));
        assert!(order_changes(&items).is_empty());
    }

    #[test]
    fn sort_by_order_is_stable() {
        let mut items = vec![
            Card { id: "x", order: 2 },
            Card { id: "y", order: 1 },
            Card { id: "z", order: 2 },
        ];
        sort_by_order(&mut items);
        assert_eq!(ids(&items), vec!["y", "x", "z"]);
    }
}
