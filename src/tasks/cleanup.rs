//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::PlayerCache;

/// Shortest pause allowed between sweeps.
pub const MIN_CLEANUP_INTERVAL: Duration = Duration::from_millis(10);

/// Clamps a requested sweep interval to [`MIN_CLEANUP_INTERVAL`].
pub fn sweep_interval(requested: Duration) -> Duration {
    requested.max(MIN_CLEANUP_INTERVAL)
}

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// Lookups already skip expired entries; the sweep keeps entries that are
/// never read again from piling up.
///
/// Intervals below [`MIN_CLEANUP_INTERVAL`] are raised to it, so the sweep
/// never spins on the write lock.
///
/// # Returns
/// A JoinHandle for the spawned task. Aborting it is how the cache is torn
/// down without dropping the handle.
///
/// # Example
/// ```ignore
/// let cache = PlayerCache::new(Duration::from_secs(43_200));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: PlayerCache, interval: Duration) -> JoinHandle<()> {
    let interval = sweep_interval(interval);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval.as_secs_f64()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;
            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
