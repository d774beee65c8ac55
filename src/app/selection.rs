use crate::log_error;
use crate::modules::archive::VerifiedConversation;
use crate::modules::bookmarks::BookmarkedCard;

use super::App;

impl App {
    /// Bookmarks in display order (group by group).
    pub fn bookmark_display_order(&self) -> Vec<BookmarkedCard> {
        self.bookmarks
            .grouped()
            .into_iter()
            .flat_map(|g| g.bookmarks)
            .collect()
    }

    pub(super) fn select_next_bookmark(&mut self) {
        if self.bookmark_selection + 1 < self.bookmarks.len() {
            self.bookmark_selection += 1;
        }
    }

    pub(super) fn select_previous_bookmark(&mut self) {
        self.bookmark_selection = self.bookmark_selection.saturating_sub(1);
    }

    pub(super) fn remove_selected_bookmark(&mut self) {
        let Some(bookmark) = self.bookmark_display_order().into_iter().nth(self.bookmark_selection)
        else {
            return;
        };

        if let Err(e) = self.bookmarks.toggle(&bookmark.card, self.session.messages()) {
            log_error!("Failed to remove bookmark: {}", e);
            self.status_message = Some(format!("Could not save bookmarks: {}", e));
        }
        self.clamp_selections();
    }

    pub fn selected_conversation(&self) -> Option<&VerifiedConversation> {
        self.archive.newest_first().get(self.verified_selection).copied()
    }

    pub(super) fn select_next_conversation(&mut self) {
        if self.verified_selection + 1 < self.archive.len() {
            self.verified_selection += 1;
            self.follow_up_selection = None;
            self.detail_scroll = 0;
        }
    }

    pub(super) fn select_previous_conversation(&mut self) {
        if self.verified_selection > 0 {
            self.verified_selection -= 1;
            self.follow_up_selection = None;
            self.detail_scroll = 0;
        }
    }

    pub(super) fn cycle_follow_up(&mut self, direction: i32) {
        let count = self
            .selected_conversation()
            .and_then(|c| c.analysis.as_ref())
            .map_or(0, |a| a.follow_up_questions().len());
        if count == 0 {
            return;
        }

        self.follow_up_selection = Some(match self.follow_up_selection {
            None => 0,
            Some(index) if direction > 0 => (index + 1) % count,
            Some(index) => (index + count - 1) % count,
        });
    }

    pub fn selected_follow_up(&self) -> Option<String> {
        let index = self.follow_up_selection?;
        let analysis = self.selected_conversation()?.analysis.as_ref()?;
        analysis.follow_up_questions().get(index).map(|q| q.to_string())
    }

    pub(super) fn clamp_selections(&mut self) {
        self.bookmark_selection = self
            .bookmark_selection
            .min(self.bookmarks.len().saturating_sub(1));
        self.verified_selection = self
            .verified_selection
            .min(self.archive.len().saturating_sub(1));
    }
}
