/// Snapshot of the countdown: seconds left and whether it is counting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub remaining_seconds: u64,
    pub is_running: bool,
}

impl TimerState {
    /// Fresh, stopped state at the given duration
    pub fn new(duration_secs: u64) -> Self {
        Self {
            remaining_seconds: duration_secs,
            is_running: false,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Render as `MM:SS`
    pub fn format(&self) -> String {
        format_countdown(self.remaining_seconds)
    }
}

/// Format seconds as `MM:SS`.
///
/// Both fields are left-padded to two digits. The minutes field is not
/// wrapped at 60, so 6000 seconds renders as `100:00`.
pub fn format_countdown(total_seconds: u64) -> String {
    let seconds = total_seconds % 60;
    let minutes = (total_seconds - seconds) / 60;
    format!("{}:{}", pad_two(minutes), pad_two(seconds))
}

fn pad_two(value: u64) -> String {
    format!("{:0>2}", value)
}
