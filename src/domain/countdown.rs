use crate::domain::{Schedule, TickOutcome, TimerState};

/// Countdown state machine.
///
/// Pure state: it never touches a clock. Every operation reports what the
/// caller must do with the tick schedule, and `tick` reports whether the
/// countdown just finished. Toggling lives on `TimerController`.
#[derive(Debug, Clone)]
pub struct Countdown {
    initial_seconds: u64,
    state: TimerState,
}

impl Countdown {
    pub fn new(initial_seconds: u64) -> Self {
        Self {
            initial_seconds,
            state: TimerState::new(initial_seconds),
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn initial_seconds(&self) -> u64 {
        self.initial_seconds
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Play/Pause is disabled once the countdown has reached zero
    pub fn can_toggle(&self) -> bool {
        !self.state.is_zero()
    }

    pub fn start(&mut self) -> Schedule {
        if self.state.is_running || self.state.is_zero() {
            return Schedule::Keep;
        }
        self.state.is_running = true;
        Schedule::Arm
    }

    pub fn pause(&mut self) -> Schedule {
        if !self.state.is_running {
            return Schedule::Keep;
        }
        self.state.is_running = false;
        Schedule::Disarm
    }

    /// Stop and rewind to the initial duration
    pub fn stop(&mut self) -> Schedule {
        self.state = TimerState::new(self.initial_seconds);
        Schedule::Disarm
    }

    /// Count one elapsed second.
    ///
    /// `Finished` is returned only on the transition to zero; the countdown
    /// is no longer running afterwards, so later ticks are `Ignored` until a
    /// `stop` and `start` re-arm it.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running || self.state.is_zero() {
            return TickOutcome::Ignored;
        }
        self.state.remaining_seconds -= 1;
        if self.state.is_zero() {
            self.state.is_running = false;
            TickOutcome::Finished
        } else {
            TickOutcome::Counted(self.state.remaining_seconds)
        }
    }
}
