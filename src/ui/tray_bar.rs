use crate::app::AppState;
use crate::ui::styles::tray_style;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the tray bar: status glyph, countdown, and the tray menu items
pub fn render_tray_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let state = app.state();
    let glyph = if app.alert.is_some() {
        "!"
    } else if state.is_running {
        ">"
    } else {
        "="
    };

    let mut spans = vec![Span::raw(format!(" {} {} ", glyph, state.format()))];
    if !app.window.is_shown() {
        spans.push(Span::raw(" [o] Open "));
    }
    spans.push(Span::raw(" [q] Quit "));

    f.render_widget(Paragraph::new(Line::from(spans)).style(tray_style()), area);
}
