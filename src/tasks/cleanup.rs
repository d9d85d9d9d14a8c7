//! Cache Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Lazy expiry on access already keeps results correct; the sweep bounds
//! the memory held by entries nobody reads again.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::service::CustomerService;

/// Spawns a background task that periodically sweeps both caches.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps, and logs how many entries each pass removed.
///
/// # Arguments
/// * `service` - Shared service whose caches are swept
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(
    service: Arc<CustomerService>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = service.purge_expired().await;

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}
