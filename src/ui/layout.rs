use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub window_area: Rect,
    pub tray_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Middle: the timer window
/// - Bottom bar: tray (1 row), present even while the window is hidden
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Window
            Constraint::Length(1), // Tray bar
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        window_area: chunks[1],
        tray_area: chunks[2],
    }
}

/// Split the window interior into display, controls and status rows
pub struct WindowLayout {
    pub display_area: Rect,
    pub controls_area: Rect,
    pub status_area: Rect,
}

pub fn create_window_layout(inner: Rect) -> WindowLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Countdown display
            Constraint::Length(1), // Play/Pause + Stop
            Constraint::Length(1), // Status line
        ])
        .split(inner);

    WindowLayout {
        display_area: chunks[0],
        controls_area: chunks[1],
        status_area: chunks[2],
    }
}

/// Center a box of the given size inside `area`, clamped to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
