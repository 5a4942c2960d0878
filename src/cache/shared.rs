//! Shared Cache Handle
//!
//! Cloneable async wrapper that owns a cache store behind a read-write lock,
//! for callers that memoize fetch results across tasks.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{CacheStore, StatsSnapshot};
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;

// == Shared Cache ==
/// Cloneable handle to a cache store shared across tasks.
///
/// Clones point at the same underlying store. All operations take the store
/// lock for the duration of the call only; `get_or_fetch` never holds it
/// across the producer await.
#[derive(Debug)]
pub struct SharedCache<V, C = SystemClock>
where
    V: Clone,
    C: Clock,
{
    store: Arc<RwLock<CacheStore<V, C>>>,
}

impl<V: Clone, C: Clock> Clone for SharedCache<V, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<V: Clone> SharedCache<V, SystemClock> {
    /// Creates a shared cache from configuration, backed by the system clock.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(CacheStore::new(config.max_entries, config.default_ttl))
    }
}

impl<V, C> SharedCache<V, C>
where
    V: Clone,
    C: Clock,
{
    // == Constructor ==
    /// Wraps an existing store in a shared handle.
    pub fn new(store: CacheStore<V, C>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    // == Store Operations ==
    /// Stores a key-value pair with optional TTL.
    pub async fn set(&self, key: impl Into<String>, data: V, ttl: Option<Duration>) {
        self.store.write().await.set(key, data, ttl);
    }

    /// Retrieves a payload by key if present and unexpired.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.store.write().await.get(key)
    }

    /// Checks whether a valid entry exists for `key`.
    pub async fn has(&self, key: &str) -> bool {
        self.store.write().await.has(key)
    }

    /// Removes an entry unconditionally; returns whether one existed.
    pub async fn delete(&self, key: &str) -> bool {
        self.store.write().await.delete(key)
    }

    /// Removes all entries and resets statistics.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    /// Removes all expired entries, returning the count removed.
    pub async fn cleanup(&self) -> usize {
        self.store.write().await.cleanup()
    }

    /// Returns a snapshot of the current statistics.
    pub async fn stats(&self) -> StatsSnapshot {
        self.store.read().await.stats()
    }

    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Get Or Fetch ==
    /// Returns the cached value for `key`, or produces it on a miss.
    ///
    /// On a miss the caller-supplied producer is awaited, its result stored
    /// under `key` with the given TTL, and returned. A producer error
    /// propagates unchanged; nothing is cached and no stale data is served in
    /// its place.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        fetch: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(cached) = self.get(key).await {
            return Ok(cached);
        }

        let data = fetch().await?;
        self.set(key, data.clone(), ttl).await;
        Ok(data)
    }
}
