//! Cache Sweeper Task
//!
//! Background task that periodically removes expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;
use crate::clock::Clock;

// == Sweeper Handle ==
/// Controls a running cleanup sweeper.
///
/// The sweeper stops when [`stop`](SweeperHandle::stop) is called or the
/// handle is dropped; it never outlives its owner.
#[derive(Debug)]
pub struct SweeperHandle {
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Stops the sweeper.
    pub fn stop(self) {
        self.task.abort();
    }

    /// Returns true if the sweeper task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

// == Start Sweeper ==
/// Spawns a background task that sweeps expired entries every `interval`.
///
/// The task runs until the returned handle is stopped or dropped. Each sweep
/// takes the store's write lock only for the duration of the cleanup scan.
///
/// # Example
/// ```ignore
/// let cache: SharedCache<String> = SharedCache::from_config(&config);
/// let sweeper = start_sweeper(cache.clone(), config.cleanup_interval);
/// // Later, during shutdown:
/// sweeper.stop();
/// ```
pub fn start_sweeper<V, C>(cache: SharedCache<V, C>, interval: Duration) -> SweeperHandle
where
    V: Clone + Send + Sync + 'static,
    C: Clock + 'static,
{
    let task = tokio::spawn(async move {
        info!("cache sweeper started, interval {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup().await;

            if removed > 0 {
                info!("cache sweep removed {} expired entries", removed);
            } else {
                debug!("cache sweep found no expired entries");
            }
        }
    });

    SweeperHandle { task }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStore;
    use crate::clock::ManualClock;

    fn shared_cache() -> (SharedCache<String, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let store = CacheStore::with_clock(100, Duration::from_secs(300), clock.clone());
        (SharedCache::new(store), clock)
    }

    #[tokio::test]
    async fn test_sweeper_removes_expired_entries() {
        let (cache, clock) = shared_cache();

        cache
            .set("expire_soon", "value".to_string(), Some(Duration::from_millis(10)))
            .await;
        clock.advance(Duration::from_millis(20));

        let sweeper = start_sweeper(cache.clone(), Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(cache.len().await, 0, "expired entry should have been swept");
        assert!(!sweeper.is_finished());
    }

    #[tokio::test]
    async fn test_sweeper_preserves_valid_entries() {
        let (cache, _clock) = shared_cache();

        cache
            .set("long_lived", "value".to_string(), Some(Duration::from_secs(3600)))
            .await;

        let _sweeper = start_sweeper(cache.clone(), Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(cache.get("long_lived").await, Some("value".to_string()));
    }

    #[tokio::test]
    async fn test_sweeper_stop_halts_sweeping() {
        let (cache, clock) = shared_cache();

        let sweeper = start_sweeper(cache.clone(), Duration::from_millis(20));
        assert!(!sweeper.is_finished());
        sweeper.stop();

        // Expire an entry after the sweeper is gone: nothing removes it.
        cache
            .set("leftover", "value".to_string(), Some(Duration::from_millis(10)))
            .await;
        clock.advance(Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(cache.len().await, 1, "stopped sweeper must not touch the store");
    }

    #[tokio::test]
    async fn test_sweeper_aborts_on_drop() {
        let (cache, clock) = shared_cache();

        {
            let _sweeper = start_sweeper(cache.clone(), Duration::from_millis(20));
        }

        cache
            .set("leftover", "value".to_string(), Some(Duration::from_millis(10)))
            .await;
        clock.advance(Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(cache.len().await, 1, "dropped sweeper must not touch the store");
    }
}
