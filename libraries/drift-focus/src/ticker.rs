//! Tokio tick driver
//!
//! Production hosts drive [`TimerManager::tick`] once per second; tests call
//! `tick()` directly instead and never sleep.

use crate::manager::TimerManager;
use drift_core::NotificationScheduler;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Handle to a running ticker task; aborts the task on drop
pub struct TickerHandle {
    handle: JoinHandle<()>,
}

impl TickerHandle {
    /// Stop the ticker
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn a task that ticks the manager once per second
///
/// Must be called from within a tokio runtime.
pub fn spawn_ticker<N>(manager: Arc<Mutex<TimerManager<N>>>) -> TickerHandle
where
    N: NotificationScheduler + Send + 'static,
{
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // The first tick fires immediately; swallow it so the countdown
        // starts a full second after spawn.
        interval.tick().await;
        loop {
            interval.tick().await;
            match manager.lock() {
                Ok(mut manager) => manager.tick(),
                Err(_) => break,
            }
        }
    });
    TickerHandle { handle }
}
