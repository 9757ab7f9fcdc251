//! Fake clock for driving schedules in tests without real waits.

use super::{Cancel, ScheduleHandle, Scheduler, SchedulerError, TickCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct Entry {
    id: u64,
    due: Duration,
    interval: Duration,
    /// Taken out while the callback runs so the clock lock can be released
    callback: Option<TickCallback>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

/// Scheduler whose time only moves when `advance` is called
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward, firing every due callback in deadline order.
    ///
    /// Callbacks run without the clock lock held, so they may cancel or
    /// schedule.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.lock().unwrap().now + by;
        while let Some((id, mut callback)) = self.take_due(target) {
            callback();
            let mut clock = self.clock.lock().unwrap();
            // Cancelled while running: the callback is dropped here
            if let Some(entry) = clock.entries.iter_mut().find(|e| e.id == id) {
                entry.callback = Some(callback);
            }
        }
        self.clock.lock().unwrap().now = target;
    }

    /// Pop the earliest callback due by `target`, moving the clock to its deadline
    fn take_due(&self, target: Duration) -> Option<(u64, TickCallback)> {
        let mut clock = self.clock.lock().unwrap();
        let entry = clock
            .entries
            .iter_mut()
            .filter(|e| e.due <= target && e.callback.is_some())
            .min_by_key(|e| (e.due, e.id))?;
        let due = entry.due;
        entry.due += entry.interval;
        let id = entry.id;
        let callback = entry.callback.take()?;
        clock.now = due;
        Some((id, callback))
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }

    /// Number of schedules not yet cancelled
    pub fn active(&self) -> usize {
        self.clock.lock().unwrap().entries.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(
        &self,
        interval: Duration,
        initial_delay: Duration,
        callback: TickCallback,
    ) -> Result<ScheduleHandle, SchedulerError> {
        let mut clock = self.clock.lock().unwrap();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + initial_delay;
        clock.entries.push(Entry {
            id,
            due,
            interval,
            callback: Some(callback),
        });
        Ok(ScheduleHandle::new(ManualCancel {
            id,
            clock: Arc::clone(&self.clock),
        }))
    }
}

struct ManualCancel {
    id: u64,
    clock: Arc<Mutex<Clock>>,
}

impl Cancel for ManualCancel {
    fn cancel(&mut self) {
        let id = self.id;
        self.clock.lock().unwrap().entries.retain(|e| e.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_initial_delay_then_interval() {
        let scheduler = ManualScheduler::new();
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        let handle = scheduler
            .schedule_repeating(
                Duration::from_secs(1),
                Duration::from_secs(1),
                Box::new(move || {
                    inner.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();

        scheduler.advance(Duration::from_millis(999));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        scheduler.advance_secs(3);
        assert_eq!(count.load(Ordering::SeqCst), 4);

        handle.cancel();
        assert_eq!(scheduler.active(), 0);
        scheduler.advance_secs(3);
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_callback_may_cancel_its_own_schedule() {
        let scheduler = ManualScheduler::new();
        let count = Arc::new(AtomicUsize::new(0));
        let slot: Arc<Mutex<Option<ScheduleHandle>>> = Arc::new(Mutex::new(None));

        let inner_count = Arc::clone(&count);
        let inner_slot = Arc::clone(&slot);
        let handle = scheduler
            .schedule_repeating(
                Duration::from_secs(1),
                Duration::from_secs(1),
                Box::new(move || {
                    inner_count.fetch_add(1, Ordering::SeqCst);
                    let handle = inner_slot.lock().unwrap().take();
                    drop(handle);
                }),
            )
            .unwrap();
        *slot.lock().unwrap() = Some(handle);

        scheduler.advance_secs(5);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.active(), 0);
    }

    #[test]
    fn test_callback_may_schedule() {
        let scheduler = ManualScheduler::new();
        let nested = scheduler.clone();
        let spawned: Arc<Mutex<Vec<ScheduleHandle>>> = Arc::new(Mutex::new(Vec::new()));
        let inner_spawned = Arc::clone(&spawned);

        let _handle = scheduler
            .schedule_repeating(
                Duration::from_secs(1),
                Duration::from_secs(1),
                Box::new(move || {
                    let handle = nested
                        .schedule_repeating(
                            Duration::from_secs(10),
                            Duration::from_secs(10),
                            Box::new(|| {}),
                        )
                        .unwrap();
                    inner_spawned.lock().unwrap().push(handle);
                }),
            )
            .unwrap();

        scheduler.advance_secs(2);
        assert_eq!(spawned.lock().unwrap().len(), 2);
        assert_eq!(scheduler.active(), 3);
    }
}
