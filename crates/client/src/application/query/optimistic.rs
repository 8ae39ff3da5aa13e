//! Optimistic update coordinator
//!
//! Writes the expected result of a mutation into the cache before the
//! network call resolves and puts the previous value back if it fails.

use std::future::Future;

use serde::Serialize;

use super::cache::{to_json, CacheEntry, QueryCache};
use super::key::{QueryFilter, QueryKey};
use crate::application::ServiceError;

/// Cache entry of a key as it was before an optimistic write
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub key: QueryKey,
    /// `None` when the key was not cached at all
    pub previous: Option<CacheEntry>,
}

#[derive(Clone)]
pub struct OptimisticUpdater {
    cache: QueryCache,
}

impl OptimisticUpdater {
    pub fn new(cache: QueryCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Cancel any fetch for `key`, capture its value, then write `next`
    pub fn begin<T: Serialize>(&self, key: &QueryKey, next: &T) -> Result<Snapshot, ServiceError> {
        let encoded = to_json(next)?;
        self.cache.cancel(key);
        let previous = self.cache.entry(key);
        self.cache.set_raw(key, encoded);
        Ok(Snapshot {
            key: key.clone(),
            previous,
        })
    }

    pub fn rollback(&self, snapshot: Snapshot) {
        tracing::debug!(key = %snapshot.key, "Rolling back optimistic write");
        self.cache.restore(&snapshot.key, snapshot.previous);
    }

    /// Run `mutation` with `optimistic` already visible under `key`.
    ///
    /// On success the server's answer replaces the optimistic value and
    /// every key matching `invalidate` is marked stale. On failure the key
    /// is restored to its snapshot and the error is returned.
    pub async fn run<T, Fut>(
        &self,
        key: QueryKey,
        optimistic: &T,
        invalidate: QueryFilter,
        mutation: Fut,
    ) -> Result<T, ServiceError>
    where
        T: Serialize,
        Fut: Future<Output = Result<T, ServiceError>>,
    {
        let _pending = self.cache.begin_mutation();
        let snapshot = self.begin(&key, optimistic)?;

        match mutation.await {
            Ok(saved) => {
                self.cache.set(&key, &saved)?;
                self.cache.invalidate(&invalidate);
                Ok(saved)
            }
            Err(e) => {
                tracing::warn!(%key, error = %e, "Optimistic mutation failed");
                self.rollback(snapshot);
                Err(e)
            }
        }
    }
}
