use crate::event::AppEvent;
use crate::modules::archive::{export_markdown, fetch_analysis, ConversationAnalysis};
use crate::modules::chat::Message;
use crate::modules::navigation::View;
use crate::log_error;

use super::App;

impl App {
    /// Lock the dialog and request the analysis; the save itself happens in
    /// [`App::finish_save`] once the analysis (or its failure) comes back.
    pub(super) fn confirm_save(&mut self) {
        if !self.session.can_save() {
            return;
        }
        let Some(title) = self.save_dialog.confirm() else {
            return;
        };

        let messages = self.session.transcript();
        let client = self.client.clone();
        let sender = self.events.app_sender();

        tokio::spawn(async move {
            let analysis = fetch_analysis(&client, &messages).await;
            sender.send(AppEvent::AnalysisFinished {
                title,
                messages,
                analysis,
            });
        });
    }

    pub(super) fn finish_save(
        &mut self,
        title: &str,
        messages: &[Message],
        analysis: Option<ConversationAnalysis>,
    ) {
        self.status_message = match self.archive.save(title, messages, analysis) {
            Ok(conversation) => Some(format!("Saved \"{}\"", conversation.title)),
            Err(e) => {
                log_error!("Failed to save conversation: {}", e);
                Some(format!("Could not save conversation: {}", e))
            }
        };

        self.save_dialog.finish();
        self.view = View::Verified;
        // Newest first, so the new entry is at the top
        self.verified_selection = 0;
        self.follow_up_selection = None;
        self.detail_scroll = 0;
    }

    pub(super) fn export_selected(&mut self) {
        let Some(conversation) = self.selected_conversation() else {
            return;
        };

        self.status_message = match export_markdown(conversation, &self.config.export_dir) {
            Ok(path) => Some(format!("Exported to {}", path.display())),
            Err(e) => {
                log_error!("Export failed: {}", e);
                Some(format!("Export failed: {}", e))
            }
        };
    }

    pub(super) fn delete_selected(&mut self) {
        let Some(id) = self.selected_conversation().map(|c| c.id.clone()) else {
            return;
        };

        match self.archive.delete(&id) {
            Ok(_) => self.status_message = Some("Conversation deleted".to_string()),
            Err(e) => {
                log_error!("Failed to delete conversation {}: {}", id, e);
                self.status_message = Some(format!("Could not delete conversation: {}", e));
            }
        }
        self.follow_up_selection = None;
        self.detail_scroll = 0;
        self.clamp_selections();
    }
}
