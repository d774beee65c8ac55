pub mod screens;
pub mod style;
pub mod widgets;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::App;
use crate::modules::navigation::View;
use crate::ui::screens::{
    bookmarks::render_bookmarks, chat::render_chat, save_dialog::render_save_dialog,
    sidebar::render_sidebar, verified::render_verified,
};
use crate::ui::style::{spinner, ACCENT, MUTED};

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(1)])
            .split(area);

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Header
                Constraint::Min(1),     // Current view
                Constraint::Length(1),  // Status line
            ])
            .split(columns[1]);

        render_sidebar(self, columns[0], buf);

        render_header(self, main_layout[0], buf);

        match self.view {
            View::Chat => render_chat(self, main_layout[1], buf),
            View::Bookmarks => render_bookmarks(self, main_layout[1], buf),
            View::Verified => render_verified(self, main_layout[1], buf),
        }

        render_status_line(self, main_layout[2], buf);

        if self.save_dialog.is_open() {
            render_save_dialog(self, centered_rect(60, 30, area), buf);
        }
    }
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let busy = if app.is_busy() {
        format!("  {}", spinner(app.spinner_frame()))
    } else {
        String::new()
    };

    Paragraph::new(format!("{}{}", app.view.title(), busy))
        .block(Block::bordered().border_type(BorderType::Rounded))
        .fg(ACCENT)
        .bold()
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_status_line(app: &App, area: Rect, buf: &mut Buffer) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(format!(" {}", message), Style::default().fg(Color::Yellow))),
        None => Line::from(Span::styled(
            format!(" {} • F1 chat • F2 bookmarks • F3 verified", app.view.title()),
            Style::default().fg(MUTED),
        )),
    };
    Paragraph::new(line).render(area, buf);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
