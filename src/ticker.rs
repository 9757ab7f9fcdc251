use std::time::Duration;

/// UI frame interval in milliseconds: input poll timeout and redraw cadence
pub const DEFAULT_FRAME_MS: u64 = 250;

/// Alert animation half-cycle, in frames (color and scale flip every 2 frames)
pub const ALERT_HALF_CYCLE_FRAMES: u32 = 2;

/// Get frame duration
pub fn frame_duration() -> Duration {
    Duration::from_millis(DEFAULT_FRAME_MS)
}

/// Which half of the alert cycle a frame falls in
pub fn alert_phase(frame: u32) -> bool {
    (frame / ALERT_HALF_CYCLE_FRAMES) % 2 == 0
}
