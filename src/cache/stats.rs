//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and sets.

use serde::Serialize;

// == Cache Stats ==
/// Aggregate cache counters, reset only by an explicit clear.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of insertions, overwrites included
    pub sets: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Formats the hit rate as a percentage string.
    ///
    /// `"0%"` before any request, two decimal places afterwards
    /// (e.g. `"75.00%"`).
    pub fn hit_rate_percent(&self) -> String {
        if self.hits + self.misses == 0 {
            "0%".to_string()
        } else {
            format!("{:.2}%", self.hit_rate() * 100.0)
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Set ==
    /// Increments the set counter.
    pub fn record_set(&mut self) {
        self.sets += 1;
    }

    // == Reset ==
    /// Zeroes all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// == Stats Snapshot ==
/// Point-in-time statistics view handed to callers, e.g. for an admin
/// dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of insertions
    pub sets: u64,
    /// Current number of entries in the cache
    pub size: usize,
    /// Hit rate as a percentage string
    pub hit_rate: String,
}

impl StatsSnapshot {
    /// Creates a snapshot from the current counters and entry count.
    pub fn new(stats: &CacheStats, size: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            sets: stats.sets,
            size,
            hit_rate: stats.hit_rate_percent(),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.sets, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.hit_rate_percent(), "0%");
    }

    #[test]
    fn test_hit_rate_all_hits() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        assert_eq!(stats.hit_rate(), 1.0);
        assert_eq!(stats.hit_rate_percent(), "100.00%");
    }

    #[test]
    fn test_hit_rate_all_misses() {
        let mut stats = CacheStats::new();
        stats.record_miss();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.hit_rate_percent(), "0.00%");
    }

    #[test]
    fn test_hit_rate_three_hits_one_miss() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate_percent(), "75.00%");
    }

    #[test]
    fn test_reset() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        stats.record_set();

        stats.reset();

        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.sets, 0);
    }

    #[test]
    fn test_snapshot_fields() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        stats.record_set();

        let snapshot = StatsSnapshot::new(&stats, 7);
        assert_eq!(snapshot.hits, 1);
        assert_eq!(snapshot.misses, 1);
        assert_eq!(snapshot.sets, 1);
        assert_eq!(snapshot.size, 7);
        assert_eq!(snapshot.hit_rate, "50.00%");
    }
}
