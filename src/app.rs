use crate::controller::TimerController;
use crate::domain::{format_countdown, TimerEvent, TimerState, Visibility};
use crate::notifications;
use crate::scheduler::SchedulerError;
use chrono::{DateTime, Local};
use tracing::{info, warn};

/// Alert shown once the countdown hits zero
#[derive(Debug, Clone, Copy)]
pub struct AlertState {
    pub finished_at: DateTime<Local>,
    /// Frame counter driving the color/scale pulse
    pub frame: u32,
}

/// Main application state
pub struct AppState {
    pub timer: TimerController,
    pub window: Visibility,
    pub alert: Option<AlertState>,
    pub notify: bool,
    pub should_quit: bool,
    /// Last scheduler failure, shown in the window until the next action
    pub error: Option<String>,
}

impl AppState {
    pub fn new(timer: TimerController, notify: bool) -> Self {
        Self {
            timer,
            window: Visibility::Shown,
            alert: None,
            notify,
            should_quit: false,
            error: None,
        }
    }

    pub fn state(&self) -> TimerState {
        self.timer.state()
    }

    /// Play/Pause control
    pub fn toggle_run(&mut self) {
        if !self.timer.countdown().can_toggle() {
            return;
        }
        let result = self.timer.toggle();
        self.handle_result(result);
    }

    /// Stop control: rewind to the full duration
    pub fn stop(&mut self) {
        let result = self.timer.stop();
        self.handle_result(result);
    }

    pub fn start(&mut self) {
        let result = self.timer.start();
        self.handle_result(result);
    }

    /// Window close request: tuck into the tray instead of exiting
    pub fn hide_window(&mut self) {
        if self.window.is_shown() {
            info!("window hidden to tray");
            self.window = Visibility::Hidden;
        }
    }

    /// Tray "open" action
    pub fn show_window(&mut self) {
        if !self.window.is_shown() {
            info!("window restored from tray");
            self.window = Visibility::Shown;
        }
    }

    /// Tray "Quit" item
    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    /// Per-frame housekeeping: apply pending ticks and advance the alert
    pub fn on_frame(&mut self) {
        let events = self.timer.pump();
        self.handle_events(&events);
        if let Some(alert) = self.alert.as_mut() {
            alert.frame = alert.frame.wrapping_add(1);
        }
    }

    pub fn handle_events(&mut self, events: &[TimerEvent]) {
        for event in events {
            match event {
                TimerEvent::Changed => {
                    // Leaving zero (stop) clears the alert
                    if !self.state().is_zero() {
                        self.alert = None;
                    }
                }
                TimerEvent::Finished => self.on_finished(),
            }
        }
    }

    fn on_finished(&mut self) {
        self.alert = Some(AlertState {
            finished_at: Local::now(),
            frame: 0,
        });
        self.show_window();
        if self.notify {
            let label = format_countdown(self.timer.countdown().initial_seconds());
            notifications::notify_finished(&label);
        }
    }

    fn handle_result(&mut self, result: Result<Vec<TimerEvent>, SchedulerError>) {
        match result {
            Ok(events) => {
                self.error = None;
                self.handle_events(&events);
            }
            Err(e) => {
                warn!(error = %e, "timer schedule failed");
                self.error = Some(e.to_string());
            }
        }
    }
}
