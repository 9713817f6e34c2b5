//! Periodic health check.
//!
//! The ticker fires one full period after it is spawned, then every
//! period. Each tick spawns its own health check and does not wait for it,
//! so a slow request never delays the next tick. Ticks missed while the
//! runtime was busy are not replayed in a burst.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};

use crate::backend::Backend;
use crate::console::Console;
use crate::page::Page;

/// Handle to the scheduled health check.
///
/// Dropping the handle stops the schedule; [`HealthTicker::shutdown`]
/// additionally waits for the scheduling task to exit. Checks already in
/// flight run to completion either way.
#[derive(Debug)]
pub struct HealthTicker {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl HealthTicker {
    /// Schedule `console.check_health()` every `console.health_interval()`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<B, P>(console: Arc<Console<B, P>>) -> Self
    where
        B: Backend + 'static,
        P: Page + 'static,
    {
        let period = console.health_interval();
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let now = Instant::now();
            let first = now.checked_add(period).unwrap_or(now);
            let mut interval = interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = interval.tick() => {
                        debug!("scheduled health check");
                        let console = Arc::clone(&console);
                        tokio::spawn(async move { console.check_health().await });
                    }
                }
            }
            info!("health ticker stopped");
        });

        info!(period_secs = period.as_secs(), "health ticker started");
        Self {
            stop: Some(stop_tx),
            task: Some(task),
        }
    }

    /// Whether the schedule is still running.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the schedule and wait for the scheduling task to exit.
    pub async fn shutdown(mut self) {
        self.signal_stop();
        let Some(task) = self.task.take() else {
            return;
        };
        if let Err(e) = task.await {
            warn!(error = %e, "health ticker task failed");
        }
    }

    fn signal_stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            // The task may already be gone; nothing to stop then.
            let _ = stop.send(());
        }
    }
}

impl Drop for HealthTicker {
    fn drop(&mut self) {
        self.signal_stop();
    }
}
