//! Query cache
//!
//! Key-value store of the last known server state, shared by every data
//! accessor through cheap clones. Values are kept as JSON so one cache can
//! hold entities, lists, workspaces and settings side by side.
//!
//! Ordering rule: a fetch only writes its result while it is still the
//! registered in-flight request for its key. `cancel` unregisters it, so a
//! slow response can never overwrite a value written after the cancel.

use std::future::Future;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::key::{QueryFilter, QueryKey};
use crate::application::ServiceError;
use crate::ports::outbound::ApiError;

/// A stored value together with its freshness
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    value: Value,
    stale: bool,
}

impl CacheEntry {
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }
}

struct InFlight {
    ticket: u64,
    token: CancellationToken,
}

#[derive(Default)]
struct Inner {
    entries: DashMap<QueryKey, CacheEntry>,
    in_flight: DashMap<QueryKey, InFlight>,
    next_ticket: AtomicU64,
    pending_mutations: AtomicUsize,
}

#[derive(Clone, Default)]
pub struct QueryCache {
    inner: Arc<Inner>,
}

/// Counts a mutation as pending until dropped
pub struct MutationGuard {
    inner: Arc<Inner>,
}

impl Drop for MutationGuard {
    fn drop(&mut self) {
        self.inner.pending_mutations.fetch_sub(1, Ordering::SeqCst);
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<Value, ServiceError> {
    serde_json::to_value(value).map_err(|e| ServiceError::Api(ApiError::SerializeError(e.to_string())))
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_raw(&self, key: &QueryKey) -> Option<Value> {
        self.inner.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Typed read; a value that no longer decodes is treated as a miss
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let value = self.get_raw(key)?;
        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(%key, error = %e, "Cached value has unexpected shape");
                None
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &QueryKey, value: &T) -> Result<(), ServiceError> {
        self.set_raw(key, to_json(value)?);
        Ok(())
    }

    pub fn set_raw(&self, key: &QueryKey, value: Value) {
        self.inner.entries.insert(
            key.clone(),
            CacheEntry {
                value,
                stale: false,
            },
        );
    }

    /// Current entry of `key`, freshness included
    pub fn entry(&self, key: &QueryKey) -> Option<CacheEntry> {
        self.inner.entries.get(key).map(|entry| CacheEntry::clone(&entry))
    }

    /// Reinstate a captured entry as it was; `None` removes the key
    pub fn restore(&self, key: &QueryKey, previous: Option<CacheEntry>) {
        match previous {
            Some(entry) => {
                self.inner.entries.insert(key.clone(), entry);
            }
            None => {
                self.inner.entries.remove(key);
            }
        }
    }

    pub fn remove(&self, key: &QueryKey) -> Option<Value> {
        self.inner.entries.remove(key).map(|(_, entry)| entry.value)
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.inner.entries.contains_key(key)
    }

    /// Missing keys count as stale
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.inner
            .entries
            .get(key)
            .map(|entry| entry.stale)
            .unwrap_or(true)
    }

    /// Mark every matching entry stale so the next read refetches it.
    /// Returns how many entries were marked.
    pub fn invalidate(&self, filter: &QueryFilter) -> usize {
        let mut marked = 0;
        for mut entry in self.inner.entries.iter_mut() {
            if filter.matches(entry.key()) {
                entry.stale = true;
                marked += 1;
            }
        }
        tracing::debug!(?filter, marked, "Invalidated queries");
        marked
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.inner.in_flight.contains_key(key)
    }

    /// Abort the in-flight fetch for `key`, if any
    pub fn cancel(&self, key: &QueryKey) -> bool {
        match self.inner.in_flight.remove(key) {
            Some((_, in_flight)) => {
                in_flight.token.cancel();
                tracing::debug!(%key, "Cancelled in-flight fetch");
                true
            }
            None => false,
        }
    }

    /// Abort every in-flight fetch (e.g. when the owning view goes away)
    pub fn cancel_all(&self) {
        let keys: Vec<QueryKey> = self
            .inner
            .in_flight
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        for key in keys {
            self.cancel(&key);
        }
    }

    /// Cached value if fresh, otherwise fetch it
    pub async fn query<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T, ServiceError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ServiceError>>,
    {
        if !self.is_stale(&key) {
            if let Some(cached) = self.get::<T>(&key) {
                tracing::debug!(%key, "Query cache hit");
                return Ok(cached);
            }
        }
        self.fetch(key, fetcher).await
    }

    /// Always run `fetcher`, superseding any fetch already running for `key`
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T, ServiceError>
    where
        T: Serialize,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ServiceError>>,
    {
        let ticket = self.inner.next_ticket.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();
        if let Some(superseded) = self.inner.in_flight.insert(
            key.clone(),
            InFlight {
                ticket,
                token: token.clone(),
            },
        ) {
            superseded.token.cancel();
        }

        tracing::debug!(%key, ticket, "Fetching");
        let result = tokio::select! {
            biased;
            _ = token.cancelled() => Err(ServiceError::Cancelled),
            result = fetcher() => result,
        };

        let encoded = match &result {
            Ok(value) => Some(to_json(value)),
            Err(_) => None,
        };

        // Holding the in-flight slot while writing keeps `cancel` from
        // interleaving between the ownership check and the write.
        let still_registered = match self.inner.in_flight.entry(key.clone()) {
            Entry::Occupied(slot) if slot.get().ticket == ticket => {
                if let Some(Ok(value)) = &encoded {
                    self.set_raw(&key, value.clone());
                }
                slot.remove();
                true
            }
            _ => false,
        };

        match result {
            Ok(_) if !still_registered => {
                tracing::debug!(%key, ticket, "Discarding response of cancelled fetch");
                Err(ServiceError::Cancelled)
            }
            Ok(value) => match encoded {
                Some(Err(e)) => Err(e),
                _ => Ok(value),
            },
            Err(e) => Err(e),
        }
    }

    /// Mark a mutation as pending for the lifetime of the guard
    pub fn begin_mutation(&self) -> MutationGuard {
        self.inner.pending_mutations.fetch_add(1, Ordering::SeqCst);
        MutationGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    pub fn pending_mutations(&self) -> usize {
        self.inner.pending_mutations.load(Ordering::SeqCst)
    }
}
