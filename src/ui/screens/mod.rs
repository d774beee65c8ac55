pub mod bookmarks;
pub mod chat;
pub mod save_dialog;
pub mod sidebar;
pub mod verified;

use ratatui::widgets::Paragraph;

/// Rows `paragraph` occupies when rendered `width` columns wide, using
/// ratatui's own word wrapping. Pass a paragraph without a block.
pub(crate) fn wrapped_rows(paragraph: &Paragraph, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    paragraph.line_count(width).min(usize::from(u16::MAX)) as u16
}

/// First row to show so that `row` stays inside a window of `visible` rows.
pub(crate) fn scroll_to(row: u16, visible: u16) -> u16 {
    row.saturating_sub(visible.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{
        buffer::Buffer,
        layout::Rect,
        text::Line,
        widgets::{Widget, Wrap},
    };

    /// Rows of `buf` holding anything but blanks.
    fn drawn_rows(buf: &Buffer) -> u16 {
        let area = buf.area;
        (area.top()..area.bottom())
            .filter(|&y| (area.left()..area.right()).any(|x| buf[(x, y)].symbol() != " "))
            .count() as u16
    }

    #[test]
    fn test_wrapped_rows_matches_rendered_word_wrap() {
        let paragraph = Paragraph::new(Line::from("aaaaaa bbbbbb cccccc dddddd"))
            .wrap(Wrap { trim: false });

        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));
        paragraph.clone().render(buf.area, &mut buf);

        assert_eq!(drawn_rows(&buf), 4);
        assert_eq!(wrapped_rows(&paragraph, 10), 4);
    }

    #[test]
    fn test_wrapped_rows_counts_blank_lines() {
        let paragraph = Paragraph::new(vec![Line::from("abc"), Line::from(""), Line::from("abc")])
            .wrap(Wrap { trim: false });
        assert_eq!(wrapped_rows(&paragraph, 4), 3);
        assert_eq!(wrapped_rows(&paragraph, 0), 0);
    }

    #[test]
    fn test_scroll_to_keeps_row_visible() {
        assert_eq!(scroll_to(3, 10), 0);
        assert_eq!(scroll_to(25, 10), 16);
    }
}
