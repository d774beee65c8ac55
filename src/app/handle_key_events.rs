use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::event::AppEvent;
use crate::modules::navigation::View;

use super::App;

/// Rows moved by PageUp / PageDown in the chat log.
const PAGE_ROWS: u16 = 10;

impl App {
    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
            self.events.send(AppEvent::Quit);
            return;
        }

        // The save dialog is modal
        if self.save_dialog.is_open() {
            self.handle_save_dialog_key(key_event);
            return;
        }

        match key_event.code {
            KeyCode::F(1) => return self.events.send(AppEvent::SwitchView(View::Chat)),
            KeyCode::F(2) => return self.events.send(AppEvent::SwitchView(View::Bookmarks)),
            KeyCode::F(3) => return self.events.send(AppEvent::SwitchView(View::Verified)),
            _ => {}
        }

        match self.view {
            View::Chat => self.handle_chat_key(key_event),
            View::Bookmarks => self.handle_bookmarks_key(key_event),
            View::Verified => self.handle_verified_key(key_event),
        }
    }

    fn handle_save_dialog_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => {
                self.save_dialog.cancel();
            }
            KeyCode::Enter => self.events.send(AppEvent::ConfirmSave),
            KeyCode::Backspace => self.save_dialog.backspace(),
            KeyCode::Char(ch) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.save_dialog.insert_char(ch)
            }
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key_event: KeyEvent) {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match key_event.code {
            KeyCode::Enter
                if key_event.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
            {
                self.session.insert_newline();
            }
            KeyCode::Enter => self.events.send(AppEvent::ChatSubmit),
            KeyCode::Char('b') if ctrl => self.events.send(AppEvent::ToggleBookmark),
            KeyCode::Char('s') if ctrl => self.events.send(AppEvent::OpenSaveDialog),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(ch) => self.session.insert_char(ch),
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Tab => self.card_cursor.cycle(1),
            KeyCode::BackTab => self.card_cursor.cycle(-1),
            KeyCode::Esc => self.card_cursor.clear(),
            KeyCode::Up => self.viewport.scroll_up(1),
            KeyCode::Down => self.viewport.scroll_down(1),
            KeyCode::PageUp => self.viewport.scroll_up(PAGE_ROWS),
            KeyCode::PageDown => self.viewport.scroll_down(PAGE_ROWS),
            _ => {}
        }
    }

    /// Keys shared by the list views.
    fn handle_list_view_key(&mut self, key_event: KeyEvent) -> bool {
        match key_event.code {
            KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('1') => self.events.send(AppEvent::SwitchView(View::Chat)),
            KeyCode::Char('2') => self.events.send(AppEvent::SwitchView(View::Bookmarks)),
            KeyCode::Char('3') => self.events.send(AppEvent::SwitchView(View::Verified)),
            _ => return false,
        }
        true
    }

    fn handle_bookmarks_key(&mut self, key_event: KeyEvent) {
        if self.handle_list_view_key(key_event) {
            return;
        }

        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous_bookmark(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_bookmark(),
            KeyCode::Enter | KeyCode::Delete | KeyCode::Char('d') => self.remove_selected_bookmark(),
            _ => {}
        }
    }

    fn handle_verified_key(&mut self, key_event: KeyEvent) {
        if self.handle_list_view_key(key_event) {
            return;
        }

        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous_conversation(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_conversation(),
            KeyCode::Tab => self.cycle_follow_up(1),
            KeyCode::BackTab => self.cycle_follow_up(-1),
            KeyCode::PageUp => self.detail_scroll = self.detail_scroll.saturating_sub(PAGE_ROWS),
            KeyCode::PageDown => self.detail_scroll = self.detail_scroll.saturating_add(PAGE_ROWS),
            KeyCode::Char('e') => self.events.send(AppEvent::ExportSelected),
            KeyCode::Char('d') | KeyCode::Delete => self.events.send(AppEvent::DeleteSelected),
            KeyCode::Enter => {
                if let Some(question) = self.selected_follow_up() {
                    self.events.send(AppEvent::AskFollowUp(question));
                }
            }
            _ => {}
        }
    }
}
