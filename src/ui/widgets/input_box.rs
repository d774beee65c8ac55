use ratatui::widgets::{Paragraph, Wrap};

use crate::modules::chat::{ChatSession, StateChange, StateObserver};
use crate::ui::screens::wrapped_rows;

/// Height of the chat input, grown to fit its wrapped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBox {
    /// Wrapped rows of the current input, unclamped
    text_rows: u16,
    max_lines: u16,
    /// Inner width at the last render; 0 before the first one
    width: u16,
}

impl InputBox {
    pub fn new(max_lines: u16) -> Self {
        Self {
            text_rows: 1,
            max_lines: max_lines.max(1),
            width: 0,
        }
    }

    /// Visible text rows, excluding borders.
    pub fn lines(&self) -> u16 {
        self.text_rows.clamp(1, self.max_lines)
    }

    /// Rows the input needs once wrapped, which may exceed [`InputBox::lines`].
    pub fn text_rows(&self) -> u16 {
        self.text_rows
    }

    /// Rows including the surrounding border.
    pub fn outer_height(&self) -> u16 {
        self.lines() + 2
    }

    /// Re-measure `input` when the render width changed.
    pub fn fit_width(&mut self, width: u16, input: &str) {
        if width != self.width {
            self.width = width;
            self.measure(input);
        }
    }

    fn measure(&mut self, input: &str) {
        let mut rows = if self.width == 0 {
            input.split('\n').count() as u16
        } else {
            wrapped_rows(&Paragraph::new(input).wrap(Wrap { trim: false }), self.width)
        };
        // A trailing newline opens a caret row that the text itself lacks
        if self.width > 0 && input.ends_with('\n') {
            rows = rows.saturating_add(1);
        }
        self.text_rows = rows.max(1);
    }
}

impl StateObserver for InputBox {
    fn observe(&mut self, change: StateChange, session: &ChatSession) {
        if change == StateChange::Input {
            self.measure(session.input());
        }
    }
}
