use crate::app::AppState;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = if app.window.is_shown() {
        Line::from(vec![
            Span::raw(" Space play/pause   "),
            Span::raw("s stop   "),
            Span::raw("Esc/h hide   "),
            Span::raw("q quit"),
        ])
    } else {
        Line::from(vec![
            Span::raw(" Enter/o open   "),
            Span::raw("q quit"),
        ])
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
