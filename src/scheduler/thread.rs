use super::{Cancel, ScheduleHandle, Scheduler, SchedulerError, TickCallback};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Wall-clock scheduler: one background thread per schedule.
///
/// Fires at a fixed rate against absolute deadlines, so a slow callback does
/// not push later ticks back.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadScheduler;

impl ThreadScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule_repeating(
        &self,
        interval: Duration,
        initial_delay: Duration,
        mut callback: TickCallback,
    ) -> Result<ScheduleHandle, SchedulerError> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let join = thread::Builder::new()
            .name("tomato-ticker".into())
            .spawn(move || {
                let mut deadline = Instant::now() + initial_delay;
                loop {
                    let wait = deadline.saturating_duration_since(Instant::now());
                    match stop_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {
                            callback();
                            deadline += interval;
                        }
                        // Explicit stop or handle dropped
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })?;

        debug!(?interval, ?initial_delay, "timer thread started");
        Ok(ScheduleHandle::new(ThreadCancel {
            stop_tx: Some(stop_tx),
            join: Some(join),
        }))
    }
}

struct ThreadCancel {
    stop_tx: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl Cancel for ThreadCancel {
    fn cancel(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            // The thread may already be gone; dropping the sender is enough
            let _ = tx.send(());
        }
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                warn!("timer thread panicked");
            } else {
                debug!("timer thread joined");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_callback() -> (Arc<AtomicUsize>, TickCallback) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        let callback: TickCallback = Box::new(move || {
            inner.fetch_add(1, Ordering::SeqCst);
        });
        (count, callback)
    }

    #[test]
    fn test_fires_repeatedly_until_cancelled() {
        let (count, callback) = counting_callback();
        let handle = ThreadScheduler::new()
            .schedule_repeating(Duration::from_millis(20), Duration::from_millis(20), callback)
            .unwrap();

        thread::sleep(Duration::from_millis(150));
        handle.cancel();
        let fired = count.load(Ordering::SeqCst);
        assert!(fired >= 2, "expected at least 2 ticks, got {}", fired);

        thread::sleep(Duration::from_millis(100));
        assert_eq!(count.load(Ordering::SeqCst), fired);
    }

    #[test]
    fn test_waits_for_initial_delay() {
        let (count, callback) = counting_callback();
        let handle = ThreadScheduler::new()
            .schedule_repeating(Duration::from_millis(10), Duration::from_millis(500), callback)
            .unwrap();

        thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        handle.cancel();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_cancels() {
        let (count, callback) = counting_callback();
        let handle = ThreadScheduler::new()
            .schedule_repeating(Duration::from_millis(10), Duration::from_millis(10), callback)
            .unwrap();
        drop(handle);

        let after_drop = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(60));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }
}
