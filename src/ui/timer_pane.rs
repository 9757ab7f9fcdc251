use crate::app::AppState;
use crate::domain::toggle_label;
use crate::ticker::alert_phase;
use crate::ui::digits::{big_text, big_text_width, GLYPH_HEIGHT};
use crate::ui::layout::{centered, create_window_layout};
use crate::ui::styles::{
    alert_style, border_style, control_style, countdown_style, disabled_style, error_style,
    hint_style, paused_style, running_style, title_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the timer window: countdown, controls and status
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Tomato ", title_style()))
        .border_style(border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = create_window_layout(inner);
    render_display(f, app, layout.display_area);
    render_controls(f, app, layout.controls_area);
    render_status(f, app, layout.status_area);
}

/// Countdown text. Large block glyphs normally; during the alert it pulses
/// between the large form and plain text while alternating red and blue.
fn render_display(f: &mut Frame, app: &AppState, area: Rect) {
    let text = app.state().format();

    let (large, style) = match app.alert {
        Some(alert) => {
            let phase = alert_phase(alert.frame);
            (phase, alert_style(phase))
        }
        None => (true, countdown_style()),
    };

    let width = big_text_width(&text) as u16;
    let fits = area.width >= width && area.height as usize >= GLYPH_HEIGHT;

    if large && fits {
        let lines: Vec<Line> = big_text(&text)
            .into_iter()
            .map(|row| Line::styled(row, style))
            .collect();
        let target = centered(area, width, GLYPH_HEIGHT as u16);
        f.render_widget(Paragraph::new(lines), target);
    } else {
        let target = centered(area, area.width, 1);
        let paragraph = Paragraph::new(Line::styled(text, style)).alignment(Alignment::Center);
        f.render_widget(paragraph, target);
    }
}

fn render_controls(f: &mut Frame, app: &AppState, area: Rect) {
    let countdown = app.timer.countdown();
    let toggle_style = if countdown.can_toggle() {
        control_style()
    } else {
        disabled_style()
    };

    let line = Line::from(vec![
        Span::styled("[Space] ", hint_style()),
        Span::styled(toggle_label(countdown.is_running()), toggle_style),
        Span::raw("    "),
        Span::styled("[s] ", hint_style()),
        Span::styled("Stop", control_style()),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_status(f: &mut Frame, app: &AppState, area: Rect) {
    let line = if let Some(err) = &app.error {
        Line::styled(format!("Timer error: {}", err), error_style())
    } else if let Some(alert) = &app.alert {
        Line::styled(
            format!("Time's up at {}", alert.finished_at.format("%H:%M:%S")),
            alert_style(true),
        )
    } else {
        let (label, style): (&str, Style) = if app.state().is_running {
            ("running", running_style())
        } else {
            ("paused", paused_style())
        };
        Line::styled(label, style)
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
