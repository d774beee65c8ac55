use crate::event::AppEvent;
use crate::modules::navigation::View;

use super::App;

impl App {
    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::Quit => self.quit(),
            AppEvent::SwitchView(view) => self.switch_view(view),
            AppEvent::ChatSubmit => self.submit_chat(),
            AppEvent::QueryFinished(response) => self.session.complete_submit(response),
            AppEvent::ToggleBookmark => self.toggle_highlighted_bookmark(),
            AppEvent::OpenSaveDialog => {
                if self.view == View::Chat && self.session.can_save() {
                    self.save_dialog.open();
                }
            }
            AppEvent::ConfirmSave => self.confirm_save(),
            AppEvent::AnalysisFinished { title, messages, analysis } => {
                self.finish_save(&title, &messages, analysis)
            }
            AppEvent::ExportSelected => self.export_selected(),
            AppEvent::DeleteSelected => self.delete_selected(),
            AppEvent::AskFollowUp(question) => self.ask_follow_up(&question),
            AppEvent::FollowUpDue(question) => self.release_follow_up(&question),
        }
    }

    pub fn switch_view(&mut self, view: View) {
        self.view = view;
        self.status_message = None;
        self.clamp_selections();
    }
}
