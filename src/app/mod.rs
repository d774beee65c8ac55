mod handle_key_events;
mod handle_app_event;
mod submit_chat;
mod save_conversation;
mod follow_up;
mod selection;
mod notify_observers;

use color_eyre::Result;
use ratatui::DefaultTerminal;

use crate::event::{Event, EventHandler};
use crate::log_info;
use crate::modules::{
    archive::{ConversationArchive, SaveDialog},
    bookmarks::BookmarkStore,
    chat::ChatSession,
    navigation::View,
};
use crate::ui::widgets::{CardCursor, ChatViewport, InputBox};
use crate::util::{api::BackendClient, config::AppConfig, database::Database};

/// Ticks per spinner frame while a request is in flight.
const TICKS_PER_SPINNER_FRAME: usize = 3;

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Screen currently shown
    pub view: View,
    pub config: AppConfig,
    pub client: BackendClient,

    pub session: ChatSession,
    pub bookmarks: BookmarkStore,
    pub archive: ConversationArchive,
    pub save_dialog: SaveDialog,

    // View state driven by session observers
    pub viewport: ChatViewport,
    pub input_box: InputBox,
    pub card_cursor: CardCursor,

    /// Index into the flattened bookmark groups
    pub bookmark_selection: usize,
    /// Index into the archive, newest first
    pub verified_selection: usize,
    /// Index into the selected conversation's follow-up questions
    pub follow_up_selection: Option<usize>,
    /// First row shown in the verified detail pane
    pub detail_scroll: u16,

    /// Outcome of the last export/delete/persistence action
    pub status_message: Option<String>,
    pub tick_count: usize,

    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Constructs a new instance of [`App`].
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_events(config, EventHandler::new())
    }

    fn with_events(config: AppConfig, events: EventHandler) -> Result<Self> {
        let database = Database::open(&config.data_dir)?;
        let bookmarks = BookmarkStore::load(database.clone())?;
        let archive = ConversationArchive::load(database)?;
        let client = BackendClient::new(config.backend_url.clone(), config.request_timeout())?;

        log_info!("Starting WikiRAG client against {}", client.base_url());

        Ok(Self {
            running: true,
            view: View::default(),
            input_box: InputBox::new(config.max_input_lines),
            config,
            client,
            session: ChatSession::new(),
            bookmarks,
            archive,
            save_dialog: SaveDialog::new(),
            viewport: ChatViewport::new(),
            card_cursor: CardCursor::new(),
            bookmark_selection: 0,
            verified_selection: 0,
            follow_up_selection: None,
            status_message: None,
            tick_count: 0,
            detail_scroll: 0,
            events,
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Tick => {
                    self.tick_count = self.tick_count.wrapping_add(1);
                    // Only the spinner animates
                    if self.is_busy() && self.tick_count % TICKS_PER_SPINNER_FRAME == 0 {
                        needs_redraw = true;
                    }
                }
                Event::Crossterm(event) => {
                    match event {
                        crossterm::event::Event::Key(key_event)
                            if key_event.kind == crossterm::event::KeyEventKind::Press =>
                        {
                            self.handle_key_events(key_event);
                        }
                        _ => {}
                    }
                    needs_redraw = true;
                }
                Event::App(app_event) => {
                    self.handle_app_event(app_event);
                    needs_redraw = true;
                }
            }

            self.notify_observers();
        }

        log_info!("Shutting down");
        Ok(())
    }

    /// A backend request is in flight.
    pub fn is_busy(&self) -> bool {
        self.session.is_loading() || self.save_dialog.is_analyzing()
    }

    pub fn spinner_frame(&self) -> usize {
        self.tick_count / TICKS_PER_SPINNER_FRAME
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
