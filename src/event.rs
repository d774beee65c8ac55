use color_eyre::eyre::OptionExt;
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::Event as CrosstermEvent;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::modules::archive::ConversationAnalysis;
use crate::modules::chat::Message;
use crate::modules::navigation::View;
use crate::util::api::QueryResponse;

/// The frequency at which tick events are emitted.
const TICK_FPS: f64 = 30.0;

/// Representation of all possible events.
#[derive(Clone, Debug)]
pub enum Event {
    /// An event that is emitted on a regular schedule.
    Tick,
    /// Crossterm events.
    Crossterm(CrosstermEvent),
    /// Application events.
    App(AppEvent),
}

/// Application events.
#[derive(Debug, Clone)]
pub enum AppEvent {
    // System
    Quit,
    SwitchView(View),

    // Chat
    ChatSubmit,
    /// Outcome of a spawned query; `None` when it failed
    QueryFinished(Option<QueryResponse>),
    ToggleBookmark,

    // Archive
    OpenSaveDialog,
    ConfirmSave,
    AnalysisFinished {
        title: String,
        messages: Vec<Message>,
        analysis: Option<ConversationAnalysis>,
    },
    ExportSelected,
    DeleteSelected,

    // Follow-up relay
    AskFollowUp(String),
    FollowUpDue(String),
}

/// Cloneable handle for posting [`AppEvent`]s from spawned tasks.
#[derive(Clone, Debug)]
pub struct AppEventSender {
    sender: mpsc::UnboundedSender<Event>,
}

impl AppEventSender {
    pub fn send(&self, app_event: AppEvent) {
        let _ = self.sender.send(Event::App(app_event));
    }
}

/// Terminal event handler.
#[derive(Debug)]
pub struct EventHandler {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
    /// Event receiver channel.
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`] and spawns a new task to handle events.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor = EventTask::new(sender.clone());
        tokio::spawn(async { actor.run().await });
        Self { sender, receiver }
    }

    /// Channel only, with no terminal reader or ticks.
    #[cfg(test)]
    pub(crate) fn without_terminal() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Receives an event from the sender.
    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("Failed to receive event")
    }

    /// Queue an app event to be sent to the event receiver.
    pub fn send(&mut self, app_event: AppEvent) {
        let _ = self.sender.send(Event::App(app_event));
    }

    pub fn app_sender(&self) -> AppEventSender {
        AppEventSender {
            sender: self.sender.clone(),
        }
    }

    /// Deliver `app_event` once `delay` has elapsed.
    pub fn schedule(&self, app_event: AppEvent, delay: Duration) {
        let sender = self.app_sender();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            sender.send(app_event);
        });
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// A task that reads crossterm events and emits tick events on a regular schedule.
struct EventTask {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
}

impl EventTask {
    fn new(sender: mpsc::UnboundedSender<Event>) -> Self {
        Self { sender }
    }

    /// Runs the event loop.
    async fn run(self) -> color_eyre::Result<()> {
        let tick_rate = Duration::from_secs_f64(1.0 / TICK_FPS);

        let mut reader = crossterm::event::EventStream::new();
        let mut tick = tokio::time::interval(tick_rate);
        loop {
            let tick_delay = tick.tick();
            let crossterm_event = reader.next().fuse();
            tokio::select! {
              _ = self.sender.closed() => {
                break;
              }
              _ = tick_delay => {
                self.send(Event::Tick);
              }
              Some(Ok(evt)) = crossterm_event => {
                self.send(Event::Crossterm(evt));
              }
            };
        }
        Ok(())
    }

    /// Sends an event to the receiver.
    fn send(&self, event: Event) {
        let _ = self.sender.send(event);
    }
}
