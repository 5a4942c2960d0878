//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cache entry: opaque payload plus expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload
    pub data: V,
    /// Creation time, read from the owning store's clock
    pub created_at: Instant,
    /// Validity duration, fixed at insertion
    pub ttl: Duration,
    /// Number of successful reads since insertion
    pub hits: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the given creation time.
    pub fn new(data: V, ttl: Duration, now: Instant) -> Self {
        Self {
            data,
            created_at: now,
            ttl,
            hits: 0,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived its TTL as of `now`.
    ///
    /// An entry is valid while `now - created_at <= ttl`, so a zero TTL is
    /// still valid at the exact instant of insertion and expires as soon as
    /// any time has passed.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) > self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining validity as of `now`, zero once expired.
    pub fn ttl_remaining(&self, now: Instant) -> Duration {
        (self.created_at + self.ttl).saturating_duration_since(now)
    }
}
