use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::App;
use crate::modules::navigation::View;
use crate::ui::style::{dim_unless_focused, ACCENT, MUTED};

pub fn render_sidebar(app: &App, area: Rect, buf: &mut Buffer) {
    let mut lines = vec![
        Line::from(Span::styled(
            " Answers grounded in Wikipedia",
            Style::default().fg(MUTED).italic(),
        )),
        Line::from(""),
    ];

    for view in View::all() {
        let is_current = view == app.view;
        let marker = if is_current { "▶ " } else { "  " };
        let count = match view {
            View::Chat => String::new(),
            View::Bookmarks => format!(" ({})", app.bookmarks.len()),
            View::Verified => format!(" ({})", app.archive.len()),
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(
                format!("{}{}", view.title(), count),
                dim_unless_focused(is_current, Style::default().fg(Color::White)),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", view.shortcut()),
            Style::default().fg(MUTED),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Ctrl+C quit",
        Style::default().fg(MUTED),
    )));

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(" 📖 WikiRAG ")
                .border_type(BorderType::Rounded),
        )
        .fg(ACCENT)
        .render(area, buf);
}
