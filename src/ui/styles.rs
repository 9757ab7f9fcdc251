use ratatui::style::{Color, Modifier, Style};

/// Countdown digits while idle or running
pub fn countdown_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Alert pulse colors (alternate each half cycle)
pub fn alert_style(phase: bool) -> Style {
    let color = if phase { Color::Red } else { Color::Blue };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Enabled control label
pub fn control_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Disabled control label
pub fn disabled_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Running status badge style
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Paused status badge style
pub fn paused_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Title style for the window block
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Tray bar background
pub fn tray_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}
