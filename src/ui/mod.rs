pub mod digits;
pub mod keybindings;
pub mod layout;
pub mod styles;
pub mod timer_pane;
pub mod tray_bar;

use crate::app::AppState;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::{
    layout::Alignment,
    text::Line,
    widgets::Paragraph,
    Frame,
};
use styles::hint_style;
use timer_pane::render_timer_pane;
use tray_bar::render_tray_bar;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app, layout.keybindings_area);

    if app.window.is_shown() {
        render_timer_pane(f, app, layout.window_area);
    } else {
        let placeholder = Paragraph::new(Line::styled("hidden to tray", hint_style()))
            .alignment(Alignment::Center);
        f.render_widget(placeholder, layout.window_area);
    }

    // The tray outlives the window
    render_tray_bar(f, app, layout.tray_area);
}
