// src/modules/archive/save_dialog.rs

/// Title prompt shown before a conversation is analyzed and archived.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SaveDialog {
    open: bool,
    title: String,
    analyzing: bool,
}

impl SaveDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn open(&mut self) {
        if !self.analyzing {
            self.open = true;
        }
    }

    /// Close and forget the title. Refused while analysis is running.
    pub fn cancel(&mut self) -> bool {
        if self.analyzing {
            return false;
        }
        self.open = false;
        self.title.clear();
        true
    }

    pub fn insert_char(&mut self, ch: char) {
        if self.open && !self.analyzing {
            self.title.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.open && !self.analyzing {
            self.title.pop();
        }
    }

    /// Confirm the title and enter the analyzing state.
    ///
    /// Returns the title to save under, or `None` when the dialog is closed,
    /// already analyzing, or the title is blank.
    pub fn confirm(&mut self) -> Option<String> {
        if !self.open || self.analyzing || self.title.trim().is_empty() {
            return None;
        }
        self.analyzing = true;
        Some(self.title.clone())
    }

    /// Reset after the save went through.
    pub fn finish(&mut self) {
        *self = Self::default();
    }
}
