//! TTL Cleanup Task
//!
//! Background task that periodically removes expired metric cache
//! entries. TTL expiry is only a safety net behind explicit
//! invalidation, so this task exists to reclaim memory, not for
//! correctness.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Spawns a background task that periodically purges expired cache entries.
///
/// # Arguments
/// * `cache` - Shared handle to the in-memory cache backend
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(cache: Arc<MemoryCache>, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired().await;

            if removed > 0 {
                let stats = cache.stats().await;
                info!(
                    "TTL cleanup: removed {} expired entries, hit rate {:.2}",
                    removed,
                    stats.hit_rate()
                );
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MetricCache;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = Arc::new(MemoryCache::new(100));

        cache
            .set("expire_soon", "value".to_string(), Some(1))
            .await
            .unwrap();

        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Wait for the entry to expire and a cleanup pass to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert!(
            cache.is_empty().await,
            "Expired entry should have been cleaned up"
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = Arc::new(MemoryCache::new(100));

        cache
            .set("long_lived", "value".to_string(), Some(3600))
            .await
            .unwrap();

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(
            cache.get("long_lived").await.unwrap(),
            Some("value".to_string()),
            "Valid entry should not be removed"
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = Arc::new(MemoryCache::new(100));

        let handle = spawn_cleanup_task(cache, 1);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
