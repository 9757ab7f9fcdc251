//! Repeating tick sources.
//!
//! A `Scheduler` turns a callback into a fixed-rate schedule and hands back a
//! `ScheduleHandle`. Cancelling (or dropping) the handle stops the schedule
//! synchronously: once `cancel` returns, the callback will not run again.

#[cfg(test)]
pub mod manual;
pub mod thread;

use std::time::Duration;
use thiserror::Error;

#[cfg(test)]
pub use manual::ManualScheduler;
pub use thread::ThreadScheduler;

/// Callback invoked on every tick. Runs on the scheduler's own context.
pub type TickCallback = Box<dyn FnMut() + Send + 'static>;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("failed to spawn timer thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Host timer source
pub trait Scheduler {
    /// Run `callback` every `interval`, first after `initial_delay`
    fn schedule_repeating(
        &self,
        interval: Duration,
        initial_delay: Duration,
        callback: TickCallback,
    ) -> Result<ScheduleHandle, SchedulerError>;
}

/// Implementation side of a `ScheduleHandle`
pub trait Cancel: Send {
    /// Stop the schedule and release its resources. Must not return while
    /// the callback can still run.
    fn cancel(&mut self);
}

/// Owned handle to a running schedule; cancels on drop
pub struct ScheduleHandle {
    inner: Option<Box<dyn Cancel>>,
}

impl ScheduleHandle {
    pub fn new(cancel: impl Cancel + 'static) -> Self {
        Self {
            inner: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.cancel_inner();
    }

    fn cancel_inner(&mut self) {
        if let Some(mut inner) = self.inner.take() {
            inner.cancel();
        }
    }
}

impl Drop for ScheduleHandle {
    fn drop(&mut self) {
        self.cancel_inner();
    }
}

impl std::fmt::Debug for ScheduleHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduleHandle")
            .field("active", &self.inner.is_some())
            .finish()
    }
}
