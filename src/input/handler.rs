use crate::app::AppState;
use crate::domain::Visibility;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    // Ctrl+C always quits, whatever is on screen
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return true;
    }

    // Tray items are reachable in every mode
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return true;
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            app.show_window();
            return false;
        }
        _ => {}
    }

    match app.window {
        Visibility::Shown => handle_window_keys(app, key),
        Visibility::Hidden => handle_tray_keys(app, key),
    }
    false
}

/// Keys for the window controls
fn handle_window_keys(app: &mut AppState, key: KeyEvent) {
    match key.code {
        // Play/Pause
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => app.toggle_run(),

        // Stop
        KeyCode::Char('s') | KeyCode::Char('S') => app.stop(),

        // Close window into the tray
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => app.hide_window(),

        _ => {}
    }
}

/// Keys while only the tray bar is showing
fn handle_tray_keys(app: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.show_window();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{TickTiming, TimerController};
    use crate::scheduler::ManualScheduler;

    fn test_app() -> AppState {
        let timer = TimerController::new(
            60,
            TickTiming::default(),
            Box::new(ManualScheduler::new()),
        );
        AppState::new(timer, false)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_toggles_and_s_stops() {
        let mut app = test_app();
        assert!(!handle_key(&mut app, press(KeyCode::Char(' '))));
        assert!(app.state().is_running);

        handle_key(&mut app, press(KeyCode::Char('s')));
        assert!(!app.state().is_running);
        assert_eq!(app.state().remaining_seconds, 60);
    }

    #[test]
    fn test_window_controls_ignored_while_hidden() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.window, Visibility::Hidden);

        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(!app.state().is_running);

        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.window, Visibility::Shown);
    }

    #[test]
    fn test_tray_open_and_quit() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('h')));
        handle_key(&mut app, press(KeyCode::Char('o')));
        assert_eq!(app.window, Visibility::Shown);

        assert!(handle_key(&mut app, press(KeyCode::Char('q'))));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = test_app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, key));
    }
}
