/// What the owner of a countdown must do with its tick schedule after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Begin a recurring one-second tick
    Arm,
    /// Cancel the pending tick, if any
    Disarm,
    /// Leave the schedule as it is
    Keep,
}

/// Result of delivering one tick to the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown was not running; nothing changed
    Ignored,
    /// One second elapsed, this many remain
    Counted(u64),
    /// The countdown just reached zero
    Finished,
}

/// Notifications pushed from the timer to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Remaining seconds or run state changed
    Changed,
    /// One-shot: the countdown reached zero
    Finished,
}

/// Whether the main window is shown or tucked into the tray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn is_shown(&self) -> bool {
        matches!(self, Visibility::Shown)
    }
}

/// Label of the Play/Pause control for a given run state
pub fn toggle_label(is_running: bool) -> &'static str {
    if is_running {
        "Pause"
    } else {
        "Play"
    }
}
