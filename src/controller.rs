use crate::domain::{Countdown, Schedule, TickOutcome, TimerEvent, TimerState};
use crate::scheduler::{ScheduleHandle, Scheduler, SchedulerError};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use tracing::{debug, info, trace};

/// Tick cadence and first-fire delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTiming {
    pub interval: Duration,
    pub initial_delay: Duration,
}

impl Default for TickTiming {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            initial_delay: Duration::from_secs(1),
        }
    }
}

/// Drives a `Countdown` from a `Scheduler`.
///
/// The scheduler callback never touches the countdown. It only posts the
/// generation it was armed with onto a channel, and `pump` applies those
/// ticks on the caller's thread. Every arm or disarm bumps the generation,
/// so ticks queued by a cancelled schedule are dropped unread.
pub struct TimerController {
    countdown: Countdown,
    scheduler: Box<dyn Scheduler>,
    timing: TickTiming,
    pending: Option<ScheduleHandle>,
    generation: u64,
    tick_tx: Sender<u64>,
    tick_rx: Receiver<u64>,
}

impl TimerController {
    pub fn new(duration_secs: u64, timing: TickTiming, scheduler: Box<dyn Scheduler>) -> Self {
        let (tick_tx, tick_rx) = mpsc::channel();
        Self {
            countdown: Countdown::new(duration_secs),
            scheduler,
            timing,
            pending: None,
            generation: 0,
            tick_tx,
            tick_rx,
        }
    }

    pub fn state(&self) -> TimerState {
        self.countdown.state()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[cfg(test)]
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn start(&mut self) -> Result<Vec<TimerEvent>, SchedulerError> {
        let schedule = self.countdown.start();
        self.apply(schedule)
    }

    pub fn pause(&mut self) -> Result<Vec<TimerEvent>, SchedulerError> {
        let schedule = self.countdown.pause();
        self.apply(schedule)
    }

    pub fn toggle(&mut self) -> Result<Vec<TimerEvent>, SchedulerError> {
        if self.countdown.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn stop(&mut self) -> Result<Vec<TimerEvent>, SchedulerError> {
        let schedule = self.countdown.stop();
        info!(seconds = self.countdown.initial_seconds(), "countdown reset");
        self.apply(schedule)?;
        Ok(vec![TimerEvent::Changed])
    }

    /// Apply every tick posted since the last call.
    ///
    /// Must be called from the thread that owns the controller.
    pub fn pump(&mut self) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        while let Ok(generation) = self.tick_rx.try_recv() {
            if generation != self.generation || self.pending.is_none() {
                trace!(generation, current = self.generation, "dropping stale tick");
                continue;
            }
            match self.countdown.tick() {
                TickOutcome::Ignored => {}
                TickOutcome::Counted(remaining) => {
                    trace!(remaining, "tick");
                    events.push(TimerEvent::Changed);
                }
                TickOutcome::Finished => {
                    info!("countdown finished");
                    self.disarm();
                    events.push(TimerEvent::Changed);
                    events.push(TimerEvent::Finished);
                }
            }
        }
        events
    }

    fn apply(&mut self, schedule: Schedule) -> Result<Vec<TimerEvent>, SchedulerError> {
        match schedule {
            Schedule::Arm => {
                self.arm()?;
                Ok(vec![TimerEvent::Changed])
            }
            Schedule::Disarm => {
                self.disarm();
                Ok(vec![TimerEvent::Changed])
            }
            Schedule::Keep => Ok(Vec::new()),
        }
    }

    fn arm(&mut self) -> Result<(), SchedulerError> {
        self.disarm();
        let generation = self.generation;
        let tx = self.tick_tx.clone();
        let handle = self.scheduler.schedule_repeating(
            self.timing.interval,
            self.timing.initial_delay,
            Box::new(move || {
                // Receiver gone means the controller was dropped mid-cancel
                let _ = tx.send(generation);
            }),
        );
        match handle {
            Ok(handle) => {
                debug!(generation, "tick schedule armed");
                self.pending = Some(handle);
                Ok(())
            }
            Err(e) => {
                // Keep the state honest if no tick will ever arrive
                self.countdown.pause();
                Err(e)
            }
        }
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
            debug!(generation = self.generation, "tick schedule cancelled");
        }
        self.generation += 1;
    }
}

impl Drop for TimerController {
    fn drop(&mut self) {
        // Teardown only cancels; it never raises Finished
        self.disarm();
    }
}
