//! Cancellable repeating poll tasks.
//!
//! DESIGN
//! ======
//! Polls approximate real-time updates without a push channel. Each poll is
//! a detached task gated by a shared alive flag; dropping the widget calls
//! [`PollHandle::stop`] so the task exits at its next wake-up instead of
//! outliving the view that owned it.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Refresh cadence shared by every widget poll.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Stop handle for a running poll task.
#[derive(Clone, Debug)]
pub struct PollHandle {
    alive: Arc<AtomicBool>,
}

impl PollHandle {
    fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Request the poll task to exit at its next wake-up.
    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Whether the task is still scheduled to run.
    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Run `tick` once immediately, then on the given interval until stopped.
///
/// A tick that resolves late simply applies its update late; ticks are
/// idempotent region-scoped writes, so no coordination is needed.
#[cfg(feature = "csr")]
pub fn start_poll<F, Fut>(interval: Duration, mut tick: F) -> PollHandle
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let handle = PollHandle::new();
    let alive = handle.alive.clone();
    leptos::task::spawn_local(async move {
        tick().await;
        loop {
            gloo_timers::future::sleep(interval).await;
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            tick().await;
        }
    });
    handle
}
