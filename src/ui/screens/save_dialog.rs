use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::ui::style::{spinner, MUTED};

pub fn render_save_dialog(app: &App, area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);

    let dialog = &app.save_dialog;
    let mut lines = vec![
        Line::from("Title for this conversation:"),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::styled(dialog.title().to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
    ];

    if dialog.is_analyzing() {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", spinner(app.spinner_frame())), Style::default().fg(Color::Yellow)),
            Span::styled("Analyzing conversation...", Style::default().fg(MUTED).italic()),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            "Enter: analyze & save • Esc: cancel",
            Style::default().fg(MUTED),
        )));
    }

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(" 💾 Save verified conversation ")
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
