pub mod countdown;
pub mod enums;
pub mod state;

pub use countdown::Countdown;
pub use enums::{toggle_label, Schedule, TickOutcome, TimerEvent, Visibility};
pub use state::{format_countdown, TimerState};
