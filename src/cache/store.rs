//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with TTL expiration and
//! hit-count eviction.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, StatsSnapshot};
use crate::clock::{Clock, SystemClock};

// == Cache Store ==
/// Bounded key-value store with per-entry TTL.
///
/// Capacity is bounded by entry count. When an insertion would exceed the
/// bound, the entry with the fewest lifetime hits is evicted, ties broken by
/// oldest creation time. Recency of access plays no part.
#[derive(Debug)]
pub struct CacheStore<V, C = SystemClock>
where
    V: Clone,
    C: Clock,
{
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL applied to entries inserted without an explicit one
    default_ttl: Duration,
    /// Time source for expiry checks
    clock: C,
}

impl<V: Clone> CacheStore<V, SystemClock> {
    // == Constructor ==
    /// Creates a new CacheStore backed by the system clock.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold
    /// * `default_ttl` - TTL for entries inserted without an explicit one
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self::with_clock(max_entries, default_ttl, SystemClock)
    }
}

impl<V, C> CacheStore<V, C>
where
    V: Clone,
    C: Clock,
{
    /// Creates a new CacheStore with a custom clock, for deterministic
    /// expiry in tests.
    pub fn with_clock(max_entries: usize, default_ttl: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_entries,
            default_ttl,
            clock,
        }
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// If the key already exists, the value is overwritten and TTL is reset.
    /// If the cache is at capacity, the least-used entry is evicted first.
    /// Always succeeds.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `data` - The payload to store
    /// * `ttl` - Optional TTL (uses the default when None)
    pub fn set(&mut self, key: impl Into<String>, data: V, ttl: Option<Duration>) {
        if self.entries.len() >= self.max_entries {
            self.evict_least_used();
        }

        let ttl = ttl.unwrap_or(self.default_ttl);
        let entry = CacheEntry::new(data, ttl, self.clock.now());
        self.entries.insert(key.into(), entry);

        self.stats.record_set();
    }

    // == Get ==
    /// Retrieves a payload by key.
    ///
    /// Returns the payload if present and unexpired. An expired entry found
    /// here is removed and counted as a miss. On a hit the entry's own hit
    /// counter is incremented as well.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now();

        if let Some(entry) = self.entries.get_mut(key) {
            if entry.is_expired(now) {
                self.entries.remove(key);
                self.stats.record_miss();
                return None;
            }

            entry.hits += 1;
            self.stats.record_hit();
            return Some(entry.data.clone());
        }

        self.stats.record_miss();
        None
    }

    // == Has ==
    /// Checks whether a valid entry exists for `key`.
    ///
    /// Applies the same validity check as `get` and removes an expired entry
    /// on the way, but touches neither the hit/miss counters nor the entry's
    /// hit count.
    pub fn has(&mut self, key: &str) -> bool {
        let now = self.clock.now();

        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(now) {
                self.entries.remove(key);
                return false;
            }
            return true;
        }

        false
    }

    // == Delete ==
    /// Removes an entry unconditionally.
    ///
    /// Returns whether an entry existed under `key`.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes all entries and resets statistics to zero.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.reset();
    }

    // == Cleanup ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before - self.entries.len()
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics and entry count.
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot::new(&self.stats, self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included until
    /// they are swept or touched.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Eviction ==
    /// Removes the entry with the fewest lifetime hits, ties broken by
    /// oldest creation time. Removes exactly one entry.
    fn evict_least_used(&mut self) {
        let victim = self
            .entries
            .iter()
            .min_by(|(_, a), (_, b)| a.hits.cmp(&b.hits).then(a.created_at.cmp(&b.created_at)))
            .map(|(key, _)| key.clone());

        if let Some(key) = victim {
            self.entries.remove(&key);
        }
    }
}
