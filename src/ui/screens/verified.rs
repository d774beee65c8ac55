use chrono::{Local, TimeZone};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::modules::archive::{ConversationAnalysis, VerifiedConversation};
use crate::modules::chat::Role;
use crate::ui::screens::{scroll_to, wrapped_rows};
use crate::ui::style::{role_style, selected, ACCENT, MUTED};

pub fn render_verified(app: &mut App, area: Rect, buf: &mut Buffer) {
    if app.archive.is_empty() {
        Paragraph::new(vec![
            Line::from(""),
            Line::from("No verified conversations yet."),
            Line::from("Press Ctrl+S in the chat to analyze and save one."),
        ])
        .block(
            Block::bordered()
                .title(" ✅ Verified conversations ")
                .border_type(BorderType::Rounded),
        )
        .fg(MUTED)
        .alignment(Alignment::Center)
        .render(area, buf);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_list(app, layout[0], buf);
    render_detail(app, layout[1], buf);
}

fn saved_at(timestamp: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp)
        .single()
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

fn render_list(app: &App, area: Rect, buf: &mut Buffer) {
    let mut lines = Vec::new();

    for (index, conversation) in app.archive.newest_first().into_iter().enumerate() {
        let is_selected = index == app.verified_selection;
        let badge = if conversation.analysis.is_some() { "✅ " } else { "📄 " };
        lines.push(Line::from(vec![
            Span::raw(badge),
            Span::styled(conversation.title.clone(), selected(is_selected)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {} • {} messages", saved_at(conversation.timestamp), conversation.messages.len()),
            Style::default().fg(MUTED),
        )));
    }

    let visible = area.height.saturating_sub(2);
    let selected_row = (app.verified_selection * 2 + 1) as u16;

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(" ✅ Saved (↑↓ • e export • d delete) ")
                .border_type(BorderType::Rounded),
        )
        .scroll((scroll_to(selected_row, visible), 0))
        .render(area, buf);
}

/// Appends the analysis section; returns the line index of the selected
/// follow-up question, if any.
fn analysis_lines(
    app: &App,
    analysis: &ConversationAnalysis,
    lines: &mut Vec<Line<'static>>,
) -> Option<usize> {
    let mut selected_line = None;
    let heading = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

    lines.push(Line::from(Span::styled("Overall summary", heading)));
    lines.push(Line::from(analysis.overall_summary.clone()));
    lines.push(Line::from(""));

    if !analysis.metacognitive_insights.is_empty() {
        lines.push(Line::from(Span::styled("🧠 Metacognitive insights", heading)));
        for insight in &analysis.metacognitive_insights {
            let kind = insight.kind();
            lines.push(Line::from(vec![
                Span::raw(format!(" {} ", kind.icon())),
                Span::styled(insight.topic.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  [{}]", kind.as_str()), Style::default().fg(MUTED)),
            ]));
            if !insight.search_keywords.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    🔎 {}", insight.search_keywords.join(", ")),
                    Style::default().fg(MUTED),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    if !analysis.external_verifications.is_empty() {
        lines.push(Line::from(Span::styled("🔍 External verification", heading)));
        let mut follow_up_index = 0;
        for verification in &analysis.external_verifications {
            lines.push(Line::from(Span::styled(
                format!(" {}", verification.topic),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("   {}", verification.summary)));
            lines.push(Line::from(Span::styled(
                format!("   {}", verification.source),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            )));
            for question in &verification.follow_up_questions {
                let is_selected = app.follow_up_selection == Some(follow_up_index);
                if is_selected {
                    selected_line = Some(lines.len());
                }
                lines.push(Line::from(vec![
                    Span::styled("   ➜ ", Style::default().fg(Color::Yellow)),
                    Span::styled(question.clone(), selected(is_selected)),
                ]));
                follow_up_index += 1;
            }
        }
        lines.push(Line::from(""));
    }

    selected_line
}

fn detail_lines(
    app: &App,
    conversation: &VerifiedConversation,
) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines = Vec::new();

    let selected_line = match &conversation.analysis {
        Some(analysis) => analysis_lines(app, analysis, &mut lines),
        None => {
            lines.push(Line::from(Span::styled(
                "No analysis available for this conversation.",
                Style::default().fg(MUTED).italic(),
            )));
            lines.push(Line::from(""));
            None
        }
    };

    lines.push(Line::from(Span::styled(
        "💬 Transcript",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    for message in &conversation.messages {
        let label = match message.role {
            Role::User => "👤 ",
            Role::Assistant => "🤖 ",
        };
        lines.push(Line::from(vec![
            Span::styled(label, role_style(message.role)),
            Span::raw(message.content.clone()),
        ]));
    }

    (lines, selected_line)
}

/// Clamp `current` to the content, moving just enough to show `selected_row`.
fn detail_offset(current: u16, selected_row: Option<u16>, content_rows: u16, visible: u16) -> u16 {
    let mut offset = current;
    if let Some(row) = selected_row {
        if row < offset || row >= offset.saturating_add(visible) {
            offset = scroll_to(row, visible);
        }
    }
    offset.min(content_rows.saturating_sub(visible))
}

fn render_detail(app: &mut App, area: Rect, buf: &mut Buffer) {
    let Some(conversation) = app.selected_conversation() else {
        return;
    };
    let title = format!(" {} (Tab follow-ups • Enter ask • PgUp/PgDn scroll) ", conversation.title);
    let (lines, selected_line) = detail_lines(app, conversation);

    let width = area.width.saturating_sub(2);
    let visible = area.height.saturating_sub(2);

    // Last wrapped row of the selected follow-up
    let selected_row = selected_line.map(|line| {
        let head = Paragraph::new(lines[..=line].to_vec()).wrap(Wrap { trim: false });
        wrapped_rows(&head, width).saturating_sub(1)
    });

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    app.detail_scroll = detail_offset(
        app.detail_scroll,
        selected_row,
        wrapped_rows(&paragraph, width),
        visible,
    );

    paragraph
        .block(
            Block::bordered()
                .title(title)
                .border_type(BorderType::Rounded),
        )
        .scroll((app.detail_scroll, 0))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_offset_clamps_to_content() {
        assert_eq!(detail_offset(50, None, 30, 10), 20);
        assert_eq!(detail_offset(5, None, 8, 10), 0);
    }

    #[test]
    fn test_detail_offset_follows_selected_row() {
        // Below the window
        assert_eq!(detail_offset(0, Some(25), 60, 10), 16);
        // Above the window
        assert_eq!(detail_offset(30, Some(4), 60, 10), 0);
        // Already visible: leave the user's scroll alone
        assert_eq!(detail_offset(3, Some(8), 60, 10), 3);
    }
}
