use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::modules::chat::Role;
use crate::ui::screens::wrapped_rows;
use crate::ui::style::{role_style, spinner, MUTED};

pub fn render_chat(app: &mut App, area: Rect, buf: &mut Buffer) {
    // The input box sizes itself to the wrapped input before layout
    app.input_box
        .fit_width(area.width.saturating_sub(2), app.session.input());

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                                // Chat log
            Constraint::Length(app.input_box.outer_height()),  // Input box
        ])
        .split(area);

    render_log(app, layout[0], buf);
    render_input(app, layout[1], buf);
}

fn message_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let highlighted = app.card_cursor.current_index();
    let mut card_index = 0;

    for message in app.session.messages() {
        let prefix = match message.role {
            Role::User => "👤 You: ",
            Role::Assistant => "🤖 Assistant: ",
        };

        let mut content = message.content.lines();
        lines.push(Line::from(vec![
            Span::styled(prefix, role_style(message.role)),
            Span::styled(content.next().unwrap_or_default().to_string(), Style::default().fg(Color::White)),
        ]));
        for line in content {
            lines.push(Line::from(format!("   {}", line)).fg(Color::White));
        }

        if !message.cards().is_empty() {
            lines.push(Line::from(Span::styled(
                "   📚 Knowledge cards",
                Style::default().fg(MUTED),
            )));
        }
        for card in message.cards() {
            let star = if app.bookmarks.is_bookmarked(card) { "★" } else { "☆" };
            let is_selected = highlighted == Some(card_index);
            let style = if is_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Blue)
            };

            lines.push(Line::from(vec![
                Span::styled(format!("   {} ", star), Style::default().fg(Color::Yellow)),
                Span::styled(card.summary.clone(), style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("     {}", card.source),
                Style::default().fg(MUTED).add_modifier(Modifier::UNDERLINED),
            )));
            card_index += 1;
        }
        lines.push(Line::from(""));
    }

    if app.session.is_loading() {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", spinner(app.spinner_frame())), Style::default().fg(Color::Yellow)),
            Span::styled("Searching Wikipedia...", Style::default().fg(MUTED).italic()),
        ]));
    }

    lines
}

fn render_log(app: &mut App, area: Rect, buf: &mut Buffer) {
    let paragraph = Paragraph::new(message_lines(app)).wrap(Wrap { trim: false });

    let inner_width = area.width.saturating_sub(2);
    let visible_rows = area.height.saturating_sub(2);
    let offset = app
        .viewport
        .resolve(wrapped_rows(&paragraph, inner_width), visible_rows);

    paragraph
        .block(
            Block::bordered()
                .title(" Chat (↑↓ scroll • Tab cards • Ctrl+B bookmark • Ctrl+S save) ")
                .border_type(BorderType::Rounded),
        )
        .scroll((offset, 0))
        .render(area, buf);
}

fn render_input(app: &App, area: Rect, buf: &mut Buffer) {
    let title = if app.session.is_loading() {
        " Waiting for answer... "
    } else {
        " Ask a question (Enter send • Shift+Enter newline) "
    };

    // Keep the caret row in view once the text outgrows the box
    let scroll = app.input_box.text_rows().saturating_sub(app.input_box.lines());

    Paragraph::new(app.session.input().to_string())
        .wrap(Wrap { trim: false })
        .block(
            Block::bordered()
                .title(title)
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Yellow)
        .scroll((scroll, 0))
        .render(area, buf);
}
