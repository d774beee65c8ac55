use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::ui::screens::scroll_to;
use crate::ui::style::{selected, MUTED, USER};

pub fn render_bookmarks(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .title(" ★ Bookmarks (↑↓ select • Enter/d remove) ")
        .border_type(BorderType::Rounded);

    if app.bookmarks.is_empty() {
        Paragraph::new(vec![
            Line::from(""),
            Line::from("No bookmarks yet."),
            Line::from("Highlight a knowledge card with Tab in the chat and press Ctrl+B."),
        ])
        .block(block)
        .fg(MUTED)
        .alignment(Alignment::Center)
        .render(area, buf);
        return;
    }

    let mut lines = Vec::new();
    let mut selected_row = 0;
    let mut index = 0;

    for group in app.bookmarks.grouped() {
        lines.push(Line::from(vec![
            Span::styled("❓ ", Style::default().fg(USER)),
            Span::styled(group.question.clone(), Style::default().fg(USER).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  ({})", group.bookmarks.len()), Style::default().fg(MUTED)),
        ]));

        for bookmark in &group.bookmarks {
            let is_selected = index == app.bookmark_selection;
            if is_selected {
                selected_row = lines.len() as u16;
            }
            lines.push(Line::from(vec![
                Span::styled("  ★ ", Style::default().fg(Color::Yellow)),
                Span::styled(bookmark.card.summary.clone(), selected(is_selected)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", bookmark.card.source),
                Style::default().fg(MUTED),
            )));
            index += 1;
        }
        lines.push(Line::from(""));
    }

    let visible = area.height.saturating_sub(2);
    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll_to(selected_row + 1, visible), 0))
        .render(area, buf);
}
