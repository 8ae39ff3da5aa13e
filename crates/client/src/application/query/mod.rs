//! Query cache and optimistic updates

pub mod cache;
pub mod key;
pub mod optimistic;

pub use cache::{CacheEntry, MutationGuard, QueryCache};
pub use key::{QueryFilter, QueryKey};
pub use optimistic::{OptimisticUpdater, Snapshot};
