//! Countdown task
//!
//! A tokio task that fires once per period until its callback breaks or the
//! task is cancelled. Dropping a [`Countdown`] cancels it, so a replaced game
//! never leaves a timer running.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Handle to a running countdown
#[derive(Debug, Default)]
pub struct Countdown {
    handle: Option<JoinHandle<()>>,
}

impl Countdown {
    /// A countdown that is not running
    pub fn idle() -> Self {
        Self { handle: None }
    }

    /// Call `on_tick` every `period`, first after one full period
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F, Fut>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ControlFlow<()>> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if on_tick().await.is_break() {
                    break;
                }
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Stop the countdown; a no-op if already stopped
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// True while the task is alive
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel();
    }
}
