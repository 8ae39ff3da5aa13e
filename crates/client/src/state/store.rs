//! Reducer-backed store

use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::watch;

/// Pure state transition
pub trait Reducer {
    type State: Clone + Send + Sync + 'static;
    type Action;

    fn reduce(state: &Self::State, action: Self::Action) -> Self::State;
}

/// Holds the current state of one reducer and notifies subscribers on change
pub struct Store<R: Reducer> {
    sender: Arc<watch::Sender<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R>
where
    R::State: Default,
{
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
            _reducer: PhantomData,
        }
    }

    pub fn dispatch(&self, action: R::Action) {
        self.sender.send_modify(|state| {
            let next = R::reduce(state, action);
            *state = next;
        });
    }

    /// Snapshot of the current state
    pub fn state(&self) -> R::State {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter;

    impl Reducer for Counter {
        type State = u32;
        type Action = u32;

        fn reduce(state: &u32, action: u32) -> u32 {
            state + action
        }
    }

    #[tokio::test]
    async fn subscribers_see_dispatched_state() {
        let store: Store<Counter> = Store::default();
        let mut changes = store.subscribe();

        store.dispatch(2);
        store.clone().dispatch(3);

        changes.changed().await.unwrap();
        assert_eq!(*changes.borrow_and_update(), 5);
        assert_eq!(store.state(), 5);
    }
}
