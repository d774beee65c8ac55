#[allow(unused_imports)] // Needed for Stylize in this scope
use ratatui::style::{Style, Stylize};
use ratatui::style::{Color, Modifier};

use crate::modules::chat::Role;

pub const ACCENT: Color = Color::Green;
pub const USER: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;

/// Braille spinner shown while a backend request is in flight.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim().italic() }
}

pub fn role_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(USER).add_modifier(Modifier::BOLD),
        Role::Assistant => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    }
}

pub fn selected(is_selected: bool) -> Style {
    if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
    }
}
